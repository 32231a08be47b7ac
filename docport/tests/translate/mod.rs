mod blocks;
mod lists;
mod tables;
