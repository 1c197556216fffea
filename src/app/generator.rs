use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest operand a problem can contain.
pub const OPERAND_MIN: u32 = 1;
/// Largest operand a problem can contain.
pub const OPERAND_MAX: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Operator {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol printed on the worksheet.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
        }
    }

    /// The name shown in the sidebar.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }

    /// All operators, in sidebar order.
    pub fn all() -> &'static [Operator] {
        &[Self::Add, Self::Subtract, Self::Multiply, Self::Divide]
    }
}

/// A single arithmetic exercise: two operands and an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub first: u32,
    pub second: u32,
    pub operator: Operator,
}

/// Generate `count` problems with operands drawn uniformly from [1, 9].
///
/// For subtraction the sampled pair is reordered so the larger operand comes
/// first, keeping every answer non-negative.
pub fn generate(operator: Operator, count: usize) -> Vec<Problem> {
    generate_with(&mut rand::thread_rng(), operator, count)
}

/// Same as [`generate`], but with a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, operator: Operator, count: usize) -> Vec<Problem> {
    (0..count)
        .map(|_| {
            let mut first = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
            let mut second = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);

            if operator == Operator::Subtract && second > first {
                std::mem::swap(&mut first, &mut second);
            }

            Problem { first, second, operator }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_exact_count() {
        for count in [0, 1, 25, 100] {
            let problems = generate(Operator::Add, count);
            assert_eq!(problems.len(), count);
        }
    }

    #[test]
    fn test_generate_zero_is_empty() {
        assert!(generate(Operator::Divide, 0).is_empty());
    }

    #[test]
    fn test_operands_in_range() {
        for &op in Operator::all() {
            for problem in generate(op, 200) {
                assert!((OPERAND_MIN..=OPERAND_MAX).contains(&problem.first));
                assert!((OPERAND_MIN..=OPERAND_MAX).contains(&problem.second));
                assert_eq!(problem.operator, op);
            }
        }
    }

    #[test]
    fn test_subtract_never_goes_negative() {
        for problem in generate(Operator::Subtract, 500) {
            assert!(
                problem.first >= problem.second,
                "{} - {} would be negative",
                problem.first,
                problem.second
            );
        }
    }

    #[test]
    fn test_subtract_reorders_sampled_pair() {
        // Walk seeds until the raw draw comes out ascending, then check the
        // emitted problem has the pair swapped.
        for seed in 0..64u64 {
            let mut probe = StdRng::seed_from_u64(seed);
            let a = probe.gen_range(OPERAND_MIN..=OPERAND_MAX);
            let b = probe.gen_range(OPERAND_MIN..=OPERAND_MAX);
            if b > a {
                let mut rng = StdRng::seed_from_u64(seed);
                let problems = generate_with(&mut rng, Operator::Subtract, 1);
                assert_eq!(problems[0].first, b);
                assert_eq!(problems[0].second, a);
                return;
            }
        }
        panic!("no seed produced an ascending pair");
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }
}
