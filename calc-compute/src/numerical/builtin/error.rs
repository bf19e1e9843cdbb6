/// Represents an error that can occur while evaluating a builtin function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuiltinError {
    /// The function was given a different number of arguments than it takes.
    ArgumentCount {
        /// The number of arguments the function takes.
        expected: usize,

        /// The number of arguments that were given.
        given: usize,
    },

    /// The argument to the factorial function rounded to a negative integer.
    NegativeFactorial {
        /// The rounded argument.
        rounded: f64,
    },
}
