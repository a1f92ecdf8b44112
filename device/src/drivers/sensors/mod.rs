pub mod mma8452;
