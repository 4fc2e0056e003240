/// Receives each [`Step`](super::simplify::step::Step) taken by the simplifier, in the order the
/// rules matched.
///
/// `()` discards every step; `Vec<S>` keeps them all.
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn record(collector: &mut dyn StepCollector<&'static str>) {
        collector.push("add-zero");
        collector.push("single-operand");
    }

    #[test]
    fn vec_keeps_steps_in_order() {
        let mut steps = Vec::new();
        record(&mut steps);
        assert_eq!(steps, vec!["add-zero", "single-operand"]);
        record(&mut ());
    }
}
