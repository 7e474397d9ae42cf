use failure_derive::Fail;
use specs::{error::WrongGeneration, Entity};

#[derive(Fail, Debug)]
pub enum CollisionError {
    #[fail(display = "entity {:?} has no rigid body", _0)]
    MissingBody(Entity),
    #[fail(display = "{}", _0)]
    WrongGeneration(#[cause] WrongGeneration),
}

impl From<WrongGeneration> for CollisionError {
    fn from(err: WrongGeneration) -> CollisionError {
        CollisionError::WrongGeneration(err)
    }
}

pub type CollisionResult<T> = Result<T, CollisionError>;
