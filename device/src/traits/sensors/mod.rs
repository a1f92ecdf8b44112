pub mod accelerometer;
