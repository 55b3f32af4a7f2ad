mod setup;

pub use self::setup::setup;
