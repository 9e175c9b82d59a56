pub mod algorithm;
pub mod burning_ship;
pub mod escape_time;
pub mod fractal_kinds;
pub mod julia;
pub mod kernel;
pub mod mandelbrot;
pub mod newton;
pub mod phoenix;
pub mod seeded_random;
pub mod tricorn;
