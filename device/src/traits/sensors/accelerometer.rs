use crate::domain::acceleration::Acceleration;

pub trait Accelerometer {
    type Error;

    /// Take the latest sample if the sensor flagged one as ready, `None` otherwise.
    async fn acceleration(&mut self) -> Result<Option<Acceleration>, Self::Error>;
}
