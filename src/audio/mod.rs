pub mod sound_pool;
