mod common;
mod desk;
