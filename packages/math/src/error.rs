/// Arithmetic failures. Every checked operation reports one of these
/// instead of wrapping or saturating.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    Overflow,
    Underflow,
    DivisionByZero,
}
