//! Side tags for the two trees of a [`Bimap`](crate::Bimap).

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Left {}
    impl Sealed for super::Right {}
}

/// Tree ordered by left keys.
#[derive(Debug)]
pub enum Left {}

/// Tree ordered by right keys.
#[derive(Debug)]
pub enum Right {}

/// One of the two sides. `Flipped` names the other one.
pub trait Side: sealed::Sealed + 'static {
    type Flipped: Side<Flipped = Self>;
}

impl Side for Left {
    type Flipped = Right;
}

impl Side for Right {
    type Flipped = Left;
}
