//! Generated 8x8 benchmark dataset (input elements uniform in 0..=2).

pub const DIM: usize = 8;
pub const NUMEL: usize = DIM * DIM;

pub static INPUT_A: [i32; NUMEL] = [
     0,  1,  1,  1,  2,  0,  1,  0,
     0,  2,  2,  0,  0,  1,  0,  2,
     0,  2,  1,  0,  1,  1,  0,  2,
     1,  2,  0,  1,  1,  0,  2,  2,
     0,  2,  0,  0,  0,  2,  0,  1,
     2,  1,  0,  2,  0,  2,  1,  0,
     2,  2,  0,  1,  2,  0,  1,  1,
     1,  1,  1,  1,  2,  1,  1,  2,
];

pub static INPUT_B: [i32; NUMEL] = [
     1,  0,  0,  2,  2,  1,  0,  1,
     0,  1,  1,  1,  0,  0,  0,  2,
     2,  0,  2,  1,  0,  2,  2,  1,
     2,  0,  1,  0,  2,  2,  0,  1,
     0,  1,  2,  0,  0,  2,  1,  2,
     2,  2,  1,  1,  1,  1,  0,  1,
     1,  1,  2,  2,  2,  2,  2,  0,
     0,  0,  0,  0,  2,  0,  2,  1,
];

pub static EXPECTED: [i32; NUMEL] = [
     5,  4, 10,  4,  4, 10,  6,  8,
     6,  4,  7,  5,  5,  5,  8,  9,
     4,  5,  7,  4,  5,  5,  7, 10,
     5,  5,  9,  8, 12,  9,  9, 10,
     4,  6,  4,  4,  4,  2,  2,  7,
    11,  6,  7,  9, 12, 10,  2,  8,
     5,  5,  9,  8, 10, 10,  6, 12,
     8,  6, 11,  7, 11, 12, 10, 12,
];
