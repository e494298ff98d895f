use std::fmt;

const ORIGIN: (i32, i32) = (0, 0);

pub struct Point {
    x: i32,
    y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

mod geometry {
    pub fn distance(a: i32, b: i32) -> i32 {
        (a - b).abs()
    }
}

async fn fetch_points() -> usize {
    0
}

pub async fn publish() {}

macro_rules! square {
    ($x:expr) => {
        $x * $x
    };
}
