use std::fmt::{Display, Formatter, Result};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubZero,

    /// `+(a) = a`
    /// `*(a) = a`
    SingleOperand,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`, or an error if `a` is zero
    ZeroDivide,

    /// `a/a = 1`
    DivideSelf,

    /// `a^0 = 1`
    PowerZero,

    /// `(a^b)^c = a^(b*c)`
    MultiplyPowers,

    /// `a*a = a^2`
    PowerSelf,

    /// `a^b*a^c = a^(b+c)`
    /// `a^b/a^c = a^(b-c)`
    AddPowers,

    /// `2+3+a+a = 5+2a`
    CombineLikeTerms,

    /// `2*a*3*a = 6a^2`
    CombineLikeFactors,

    /// `a*(b+c) = a*b + a*c`
    Distribute,

    /// `a*b + a*c = a*(b+c)`
    Factor,

    /// `2*3 = 6`
    ConstantFold,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Step::AddZero => "add-zero",
            Step::SubZero => "sub-zero",
            Step::SingleOperand => "single-operand",
            Step::MultiplyZero => "mult-zero",
            Step::MultiplyOne => "mult-one",
            Step::DivideOne => "div-one",
            Step::ZeroDivide => "zero-div",
            Step::DivideSelf => "div-self",
            Step::PowerZero => "pow-zero",
            Step::MultiplyPowers => "mult-pow",
            Step::PowerSelf => "pow-self",
            Step::AddPowers => "add-pow",
            Step::CombineLikeTerms => "add-collect",
            Step::CombineLikeFactors => "mult-collect",
            Step::Distribute => "defact",
            Step::Factor => "refact",
            Step::ConstantFold => "constant-fold",
        };
        write!(f, "{}", name)
    }
}
