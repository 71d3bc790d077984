pub mod brands_seed;
