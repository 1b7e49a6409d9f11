//! Generated 32x32 benchmark dataset (input elements uniform in 0..=2).

pub const DIM: usize = 32;
pub const NUMEL: usize = DIM * DIM;

pub static INPUT_A: [i32; NUMEL] = [
     1,  1,  2,  0,  1,  2,  2,  2,  1,  1,  1,  0,  1,  1,  2,  2,
     1,  0,  2,  0,  2,  0,  0,  0,  1,  1,  1,  0,  1,  1,  0,  2,
     0,  0,  2,  2,  2,  0,  1,  0,  2,  0,  0,  2,  2,  2,  1,  0,
     2,  1,  1,  1,  1,  1,  2,  2,  0,  2,  2,  1,  2,  0,  1,  2,
     2,  0,  0,  0,  0,  0,  1,  0,  1,  2,  1,  0,  1,  1,  0,  1,
     2,  1,  2,  2,  0,  0,  0,  1,  1,  2,  2,  2,  2,  1,  0,  1,
     0,  2,  1,  2,  0,  1,  1,  0,  2,  2,  1,  0,  0,  0,  1,  1,
     0,  2,  2,  2,  0,  2,  1,  2,  2,  0,  1,  2,  0,  1,  2,  1,
     0,  2,  1,  2,  2,  2,  0,  1,  2,  0,  2,  2,  0,  2,  1,  0,
     0,  0,  2,  1,  0,  2,  0,  2,  0,  2,  0,  1,  0,  2,  2,  2,
     1,  1,  0,  0,  2,  1,  0,  0,  1,  2,  2,  0,  1,  0,  2,  1,
     2,  2,  0,  2,  1,  0,  2,  1,  1,  1,  0,  0,  2,  2,  0,  0,
     0,  0,  1,  0,  1,  2,  0,  0,  1,  1,  2,  0,  0,  2,  0,  1,
     2,  1,  1,  0,  2,  2,  0,  1,  1,  0,  0,  1,  0,  2,  0,  1,
     1,  2,  0,  1,  1,  1,  2,  0,  0,  1,  0,  2,  1,  1,  1,  0,
     0,  1,  2,  0,  1,  0,  0,  1,  2,  1,  0,  1,  1,  2,  0,  1,
     1,  2,  1,  2,  2,  0,  0,  0,  0,  0,  0,  1,  0,  2,  2,  2,
     0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  1,  2,  0,  0,  1,
     1,  1,  0,  0,  0,  2,  2,  2,  2,  0,  0,  2,  1,  2,  1,  0,
     1,  1,  2,  1,  0,  0,  1,  2,  1,  0,  0,  2,  1,  0,  0,  0,
     1,  2,  1,  1,  2,  2,  1,  1,  0,  2,  0,  1,  1,  2,  1,  0,
     1,  2,  0,  2,  1,  0,  1,  2,  2,  0,  2,  1,  0,  2,  0,  0,
     2,  1,  0,  1,  2,  1,  2,  2,  2,  0,  2,  1,  2,  2,  1,  1,
     2,  2,  2,  1,  0,  2,  2,  2,  2,  1,  0,  0,  2,  2,  2,  2,
     0,  1,  1,  2,  1,  0,  1,  0,  1,  0,  2,  2,  0,  2,  2,  1,
     0,  1,  2,  2,  0,  0,  2,  1,  2,  2,  2,  0,  0,  2,  2,  1,
     2,  1,  1,  0,  2,  2,  0,  2,  1,  1,  0,  1,  1,  2,  2,  1,
     1,  1,  1,  0,  1,  0,  2,  2,  0,  1,  0,  0,  2,  1,  2,  2,
     1,  1,  2,  2,  1,  0,  2,  0,  1,  0,  1,  0,  0,  1,  0,  0,
     0,  0,  1,  0,  0,  1,  0,  2,  1,  1,  0,  0,  1,  0,  0,  1,
     1,  1,  1,  2,  1,  2,  0,  2,  2,  1,  2,  1,  0,  1,  1,  0,
     2,  2,  0,  0,  2,  0,  2,  0,  0,  1,  1,  0,  1,  1,  1,  1,
     2,  0,  2,  2,  0,  0,  2,  1,  1,  0,  2,  2,  2,  1,  1,  1,
     1,  0,  1,  0,  0,  0,  0,  1,  2,  2,  0,  0,  2,  1,  2,  0,
     0,  2,  2,  0,  0,  0,  0,  1,  0,  0,  1,  2,  0,  0,  1,  0,
     2,  1,  0,  0,  2,  1,  0,  0,  2,  0,  0,  2,  0,  2,  1,  1,
     0,  2,  2,  0,  2,  0,  1,  0,  0,  2,  2,  0,  0,  1,  0,  1,
     2,  0,  2,  0,  2,  2,  0,  2,  2,  0,  1,  0,  0,  1,  0,  2,
     0,  0,  2,  2,  2,  0,  2,  1,  0,  2,  1,  1,  1,  0,  2,  0,
     0,  2,  0,  2,  0,  0,  1,  2,  1,  1,  2,  2,  1,  1,  2,  2,
     1,  1,  2,  2,  1,  1,  2,  1,  1,  2,  2,  2,  2,  1,  0,  0,
     1,  1,  1,  2,  2,  0,  0,  1,  1,  1,  2,  1,  0,  1,  0,  1,
     1,  0,  0,  1,  2,  1,  0,  1,  0,  2,  2,  0,  2,  2,  2,  0,
     2,  1,  2,  0,  2,  2,  1,  2,  1,  1,  0,  2,  1,  0,  2,  1,
     1,  0,  1,  1,  2,  0,  2,  1,  0,  1,  1,  1,  2,  2,  0,  0,
     0,  2,  1,  0,  2,  2,  0,  1,  1,  1,  1,  2,  2,  0,  0,  1,
     2,  1,  2,  2,  0,  1,  1,  0,  2,  1,  0,  0,  0,  1,  2,  2,
     2,  2,  2,  0,  2,  1,  0,  0,  2,  0,  1,  1,  2,  2,  0,  2,
     0,  0,  2,  1,  1,  0,  0,  0,  0,  2,  1,  0,  2,  1,  1,  0,
     1,  2,  2,  0,  0,  2,  1,  1,  1,  0,  2,  1,  1,  0,  1,  1,
     2,  0,  1,  1,  0,  1,  1,  1,  0,  2,  0,  2,  2,  2,  1,  2,
     0,  1,  0,  2,  1,  1,  2,  2,  1,  1,  1,  2,  0,  0,  1,  0,
     0,  2,  1,  0,  0,  1,  2,  1,  1,  2,  1,  0,  2,  1,  2,  0,
     2,  1,  1,  2,  2,  1,  0,  1,  1,  2,  2,  0,  1,  0,  2,  2,
     1,  1,  1,  2,  0,  1,  1,  2,  2,  2,  1,  1,  1,  2,  0,  1,
     1,  0,  1,  0,  0,  2,  1,  2,  1,  0,  0,  2,  1,  1,  2,  2,
     0,  0,  0,  1,  2,  1,  2,  1,  0,  0,  1,  2,  1,  2,  1,  2,
     1,  0,  2,  0,  0,  2,  0,  0,  2,  1,  0,  1,  1,  1,  0,  1,
     1,  2,  0,  0,  0,  0,  2,  1,  1,  0,  2,  2,  0,  2,  1,  1,
     1,  0,  1,  0,  0,  2,  0,  1,  2,  0,  1,  0,  1,  0,  2,  2,
     1,  0,  1,  1,  2,  2,  1,  1,  1,  1,  0,  1,  0,  1,  1,  1,
     1,  1,  1,  0,  2,  0,  0,  2,  1,  2,  2,  2,  1,  1,  0,  0,
     0,  0,  2,  2,  1,  2,  1,  1,  1,  2,  2,  0,  0,  2,  1,  1,
     0,  2,  2,  1,  2,  0,  2,  0,  2,  2,  1,  2,  2,  2,  0,  1,
];

pub static INPUT_B: [i32; NUMEL] = [
     0,  2,  0,  1,  0,  2,  1,  2,  1,  1,  0,  2,  2,  0,  2,  0,
     1,  2,  0,  1,  2,  0,  2,  1,  1,  2,  1,  1,  0,  2,  1,  0,
     1,  0,  2,  2,  1,  0,  0,  2,  1,  1,  0,  1,  0,  2,  1,  2,
     1,  0,  1,  2,  0,  1,  1,  2,  0,  2,  1,  1,  2,  1,  0,  2,
     0,  0,  1,  0,  1,  0,  0,  2,  1,  1,  1,  2,  0,  2,  1,  1,
     1,  0,  2,  1,  1,  1,  0,  1,  1,  0,  1,  0,  0,  2,  2,  1,
     1,  1,  1,  2,  2,  2,  2,  1,  0,  1,  1,  1,  0,  1,  0,  0,
     1,  1,  1,  1,  0,  0,  1,  1,  1,  0,  2,  2,  1,  2,  0,  0,
     0,  2,  1,  2,  0,  1,  2,  2,  1,  1,  0,  2,  0,  1,  1,  2,
     1,  1,  1,  2,  0,  1,  0,  2,  2,  1,  2,  0,  1,  2,  1,  1,
     1,  1,  1,  0,  1,  0,  0,  0,  2,  1,  1,  1,  2,  1,  0,  2,
     2,  1,  0,  0,  2,  2,  0,  1,  1,  0,  2,  1,  2,  2,  2,  0,
     2,  0,  0,  2,  2,  2,  0,  2,  1,  0,  1,  2,  1,  0,  1,  0,
     1,  1,  0,  0,  1,  2,  2,  1,  0,  0,  1,  0,  2,  1,  2,  1,
     1,  2,  2,  2,  2,  2,  1,  0,  1,  0,  2,  1,  2,  1,  2,  2,
     0,  0,  0,  2,  1,  2,  0,  1,  0,  1,  0,  1,  2,  0,  1,  1,
     0,  1,  2,  1,  2,  2,  2,  2,  0,  0,  1,  1,  1,  1,  0,  2,
     2,  0,  0,  2,  2,  1,  0,  2,  2,  0,  1,  0,  1,  2,  0,  2,
     2,  2,  1,  1,  2,  1,  2,  0,  0,  0,  2,  2,  0,  2,  1,  1,
     1,  2,  0,  1,  1,  2,  1,  2,  1,  1,  1,  0,  2,  0,  0,  1,
     2,  0,  1,  2,  1,  2,  0,  2,  0,  2,  1,  0,  1,  1,  1,  2,
     0,  2,  0,  1,  0,  2,  0,  1,  1,  0,  2,  1,  0,  2,  1,  1,
     2,  0,  2,  1,  1,  0,  0,  0,  1,  0,  2,  2,  1,  0,  0,  1,
     1,  1,  1,  2,  2,  2,  2,  1,  1,  1,  2,  0,  0,  0,  1,  2,
     1,  2,  1,  2,  0,  1,  2,  2,  2,  0,  0,  0,  0,  1,  0,  0,
     1,  0,  0,  1,  2,  1,  1,  1,  2,  1,  2,  2,  1,  2,  0,  1,
     2,  2,  1,  2,  0,  0,  1,  2,  1,  0,  0,  1,  0,  1,  2,  1,
     1,  1,  1,  2,  0,  2,  0,  0,  0,  0,  2,  1,  0,  1,  0,  2,
     1,  0,  2,  0,  1,  2,  0,  1,  1,  0,  2,  0,  0,  2,  2,  0,
     2,  1,  1,  2,  2,  1,  1,  1,  2,  0,  0,  2,  1,  1,  2,  1,
     1,  2,  0,  0,  2,  1,  1,  1,  1,  1,  0,  0,  0,  1,  2,  0,
     2,  2,  0,  1,  1,  2,  2,  0,  0,  0,  1,  2,  1,  2,  0,  1,
     2,  2,  1,  2,  0,  0,  0,  0,  2,  1,  1,  1,  0,  1,  1,  2,
     0,  0,  1,  2,  2,  0,  0,  1,  0,  2,  0,  0,  0,  1,  0,  0,
     0,  2,  2,  2,  2,  2,  1,  2,  1,  0,  2,  1,  0,  1,  1,  2,
     2,  1,  2,  2,  1,  0,  0,  2,  2,  0,  0,  0,  0,  1,  0,  1,
     2,  1,  2,  2,  1,  1,  0,  2,  0,  2,  1,  0,  2,  2,  2,  2,
     0,  2,  2,  0,  1,  1,  0,  0,  2,  0,  0,  0,  1,  2,  1,  1,
     2,  0,  0,  0,  0,  1,  0,  1,  0,  2,  2,  2,  2,  1,  1,  1,
     1,  0,  1,  2,  1,  0,  0,  0,  1,  1,  1,  1,  0,  0,  2,  2,
     0,  0,  1,  1,  1,  2,  0,  0,  2,  0,  1,  0,  0,  0,  1,  2,
     1,  0,  2,  0,  2,  2,  1,  1,  1,  1,  0,  1,  0,  0,  0,  1,
     0,  1,  1,  1,  0,  0,  1,  0,  2,  2,  2,  1,  2,  0,  0,  0,
     2,  1,  1,  1,  0,  1,  2,  1,  0,  0,  0,  0,  0,  0,  1,  0,
     2,  1,  1,  1,  0,  2,  0,  2,  0,  2,  0,  1,  0,  1,  2,  2,
     1,  2,  2,  1,  0,  2,  0,  1,  1,  0,  0,  2,  2,  2,  0,  0,
     0,  1,  1,  0,  1,  0,  0,  1,  1,  1,  0,  0,  1,  0,  1,  2,
     2,  0,  1,  1,  1,  1,  1,  2,  1,  0,  0,  1,  2,  2,  1,  1,
     0,  0,  0,  0,  0,  0,  2,  0,  0,  2,  2,  1,  1,  1,  1,  2,
     1,  1,  1,  1,  2,  1,  1,  1,  0,  1,  1,  0,  1,  0,  2,  1,
     1,  0,  1,  1,  1,  1,  0,  1,  0,  0,  2,  2,  2,  1,  0,  2,
     0,  1,  0,  2,  1,  0,  2,  1,  2,  2,  2,  0,  0,  0,  2,  0,
     2,  0,  1,  2,  2,  2,  1,  2,  0,  1,  2,  1,  1,  2,  2,  2,
     1,  1,  2,  1,  0,  1,  0,  2,  0,  0,  2,  2,  2,  2,  1,  1,
     0,  0,  2,  0,  2,  0,  1,  1,  0,  1,  0,  0,  1,  1,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  2,  2,  1,  0,  1,  2,  1,  0,  0,
     1,  1,  2,  0,  2,  0,  2,  2,  0,  0,  1,  0,  1,  2,  0,  0,
     2,  0,  2,  1,  2,  2,  2,  2,  1,  1,  2,  2,  2,  1,  1,  2,
     2,  2,  2,  1,  2,  1,  1,  1,  1,  0,  2,  0,  1,  2,  2,  2,
     1,  0,  0,  1,  2,  1,  1,  1,  0,  0,  0,  0,  0,  1,  1,  1,
     2,  2,  0,  1,  1,  1,  0,  1,  1,  0,  2,  1,  2,  2,  1,  2,
     2,  0,  1,  0,  1,  0,  1,  2,  1,  0,  0,  0,  2,  0,  1,  0,
     0,  1,  0,  2,  0,  1,  1,  0,  0,  2,  1,  2,  1,  1,  0,  1,
     2,  1,  1,  1,  2,  2,  1,  2,  2,  0,  0,  2,  1,  1,  2,  1,
];

pub static EXPECTED: [i32; NUMEL] = [
    32, 30, 34, 37, 35, 35, 22, 36, 27, 23, 34, 30, 26, 38, 36, 40,
    35, 27, 25, 34, 42, 45, 25, 35, 30, 17, 29, 28, 32, 39, 34, 31,
    37, 34, 42, 45, 34, 35, 29, 48, 26, 27, 37, 39, 26, 39, 29, 45,
    43, 24, 40, 47, 39, 39, 27, 48, 43, 19, 38, 33, 34, 46, 31, 35,
    34, 29, 30, 32, 32, 28, 25, 37, 14, 24, 32, 28, 29, 34, 29, 34,
    27, 25, 22, 33, 34, 27, 23, 35, 30, 22, 28, 23, 27, 33, 25, 27,
    33, 29, 37, 34, 40, 33, 26, 39, 19, 34, 41, 31, 31, 41, 31, 44,
    43, 27, 30, 35, 31, 32, 23, 45, 34, 12, 23, 24, 39, 38, 29, 30,
    36, 32, 43, 42, 34, 29, 22, 39, 25, 30, 39, 35, 37, 39, 28, 50,
    40, 25, 26, 43, 33, 38, 25, 43, 38, 15, 34, 23, 31, 40, 35, 33,
    33, 33, 35, 30, 29, 33, 24, 37, 22, 23, 33, 26, 19, 36, 32, 42,
    35, 25, 25, 41, 37, 33, 21, 38, 32, 21, 27, 25, 26, 35, 24, 29,
    23, 28, 28, 28, 23, 19, 18, 23, 25, 23, 26, 19, 19, 25, 24, 37,
    28, 20, 20, 26, 28, 32, 14, 28, 21, 10, 19, 14, 16, 29, 19, 21,
    28, 23, 33, 32, 29, 23, 21, 31, 20, 18, 29, 26, 22, 29, 25, 33,
    29, 22, 22, 29, 34, 32, 27, 33, 27, 18, 26, 18, 27, 28, 26, 28,
    20, 23, 27, 24, 24, 21, 21, 33, 15, 17, 20, 24, 11, 28, 23, 19,
    31, 18, 24, 35, 21, 23, 19, 27, 25, 14, 26, 26, 19, 28, 18, 28,
    30, 26, 37, 30, 30, 24, 18, 34, 22, 19, 26, 25, 28, 26, 27, 35,
    30, 19, 21, 33, 34, 34, 18, 32, 28, 16, 24, 21, 33, 33, 24, 30,
    36, 34, 38, 38, 34, 31, 27, 39, 28, 25, 37, 36, 23, 38, 38, 48,
    38, 24, 30, 43, 35, 37, 20, 43, 28, 21, 33, 26, 35, 38, 29, 34,
    48, 54, 49, 58, 41, 47, 37, 57, 36, 38, 48, 43, 43, 47, 46, 60,
    54, 37, 37, 56, 53, 52, 37, 55, 44, 24, 39, 35, 43, 54, 41, 42,
    46, 27, 37, 41, 35, 39, 21, 46, 17, 31, 44, 35, 30, 43, 40, 50,
    38, 32, 34, 44, 33, 37, 25, 38, 34, 13, 35, 28, 30, 40, 36, 35,
    34, 44, 40, 38, 32, 34, 25, 41, 30, 22, 33, 34, 29, 40, 38, 47,
    45, 27, 31, 43, 44, 44, 27, 45, 38, 20, 29, 32, 38, 42, 31, 32,
    15, 15, 19, 24, 20, 18, 16, 29, 12, 19, 17, 23, 17, 19, 16, 22,
    23, 16, 18, 22, 18, 22, 19, 25, 19,  9, 22, 14, 19, 28, 22, 19,
    34, 34, 40, 42, 36, 40, 23, 36, 25, 21, 37, 32, 23, 36, 31, 49,
    35, 25, 29, 41, 36, 38, 18, 42, 32, 18, 30, 27, 29, 38, 23, 27,
    35, 29, 31, 34, 33, 31, 24, 40, 22, 19, 35, 30, 29, 33, 28, 33,
    32, 24, 22, 35, 40, 33, 33, 34, 29, 19, 36, 23, 26, 36, 32, 28,
    20, 16, 30, 24, 23, 16, 12, 18, 22, 18, 30, 20, 16, 26, 21, 33,
    22, 10, 22, 27, 29, 24, 17, 30, 18, 17, 12, 12, 16, 17, 20, 21,
    27, 26, 28, 37, 24, 22, 20, 30, 24, 32, 29, 28, 19, 32, 31, 43,
    30, 25, 29, 31, 28, 38, 21, 36, 22, 16, 22, 17, 25, 33, 26, 28,
    36, 30, 36, 38, 41, 39, 28, 42, 19, 26, 44, 39, 27, 42, 32, 41,
    41, 25, 32, 40, 34, 35, 25, 50, 40, 15, 31, 30, 40, 38, 37, 31,
    40, 29, 38, 46, 39, 39, 27, 42, 26, 27, 41, 40, 28, 37, 32, 46,
    34, 27, 29, 41, 39, 41, 25, 43, 35, 22, 40, 27, 31, 41, 32, 36,
    35, 41, 40, 43, 30, 34, 28, 38, 31, 29, 36, 28, 29, 38, 34, 45,
    38, 30, 31, 38, 37, 39, 25, 45, 41, 21, 28, 29, 35, 39, 27, 26,
    25, 30, 35, 40, 32, 30, 30, 39, 25, 21, 31, 30, 24, 28, 25, 32,
    33, 24, 29, 33, 30, 37, 27, 40, 33, 18, 32, 24, 28, 33, 25, 29,
    30, 36, 41, 38, 42, 37, 32, 41, 27, 28, 40, 31, 25, 43, 37, 40,
    45, 29, 35, 39, 48, 39, 30, 43, 34, 18, 27, 30, 30, 44, 30, 33,
    27, 29, 31, 34, 26, 25, 25, 35, 19, 25, 31, 24, 18, 35, 26, 32,
    31, 24, 31, 29, 24, 28, 16, 36, 30, 10, 23, 22, 27, 34, 21, 22,
    35, 33, 31, 30, 32, 32, 24, 36, 26, 24, 33, 34, 27, 30, 34, 33,
    38, 29, 25, 37, 34, 37, 29, 36, 31, 19, 31, 31, 33, 35, 26, 28,
    41, 30, 36, 44, 35, 37, 22, 39, 29, 25, 46, 37, 31, 43, 33, 48,
    41, 23, 32, 42, 43, 40, 28, 46, 35, 23, 31, 29, 37, 33, 36, 35,
    35, 40, 38, 40, 38, 30, 31, 36, 25, 28, 35, 33, 32, 37, 30, 40,
    41, 26, 24, 37, 36, 42, 28, 45, 31, 16, 28, 28, 40, 39, 26, 30,
    31, 28, 30, 34, 26, 22, 24, 29, 23, 24, 30, 26, 25, 27, 26, 29,
    29, 27, 20, 32, 30, 37, 27, 27, 24, 14, 30, 20, 24, 30, 28, 26,
    32, 24, 27, 36, 25, 24, 18, 31, 21, 25, 32, 28, 28, 28, 28, 34,
    34, 24, 23, 33, 30, 37, 28, 34, 19, 14, 25, 21, 28, 27, 28, 30,
    27, 28, 37, 31, 38, 30, 24, 34, 24, 19, 33, 29, 26, 32, 30, 42,
    33, 23, 26, 34, 35, 34, 23, 40, 32, 19, 31, 23, 32, 37, 28, 26,
    41, 34, 46, 41, 47, 42, 32, 47, 21, 31, 45, 35, 30, 48, 39, 52,
    40, 35, 36, 41, 40, 48, 24, 45, 41, 17, 38, 32, 37, 45, 35, 35,
];
