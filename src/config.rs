/// Tunables for the console driver.
pub struct Config {
    /// Number of student slots the registry reserves up front.
    pub student_slots: usize,

    /// Length of the randomly generated array in the sorting demo.
    pub demo_len: usize,

    /// Exclusive upper bound for generated demo values.
    pub demo_range: i64,

    /// Inclusive upper bound of the binary search domain.
    pub search_bound: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            student_slots: 10,
            demo_len: 20,
            demo_range: 100,
            search_bound: 100,
        }
    }
}
