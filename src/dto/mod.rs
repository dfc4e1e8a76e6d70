pub mod clan;
