pub mod v0_2_0;
