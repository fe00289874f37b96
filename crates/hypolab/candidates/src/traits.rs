use hypolab_types::{Check, Grid};

/// A predicate checking whether an input/output pair satisfies a property.
///
/// Implemented for any `Fn(&Grid, &Grid) -> R` where `R` is a bare `bool`,
/// a `(bool, explanation)` pair, or a `Result` of either.
pub trait Hypothesis: Send + Sync {
    fn check(&self, input: &Grid, output: &Grid) -> anyhow::Result<Check>;
}

/// A function mapping an input grid to a produced output grid.
///
/// Implemented for any `Fn(&Grid) -> R` where `R` is a `Grid`, raw rows, or
/// a `Result` of either.
pub trait Transformation: Send + Sync {
    fn apply(&self, input: &Grid) -> anyhow::Result<Grid>;
}

/// Return shapes a hypothesis may answer with.
pub trait IntoCheck {
    fn into_check(self) -> anyhow::Result<Check>;
}

impl IntoCheck for Check {
    fn into_check(self) -> anyhow::Result<Check> {
        Ok(self)
    }
}

impl IntoCheck for bool {
    fn into_check(self) -> anyhow::Result<Check> {
        Ok(Check::from(self))
    }
}

impl IntoCheck for (bool, String) {
    fn into_check(self) -> anyhow::Result<Check> {
        Ok(Check::from(self))
    }
}

impl IntoCheck for (bool, &str) {
    fn into_check(self) -> anyhow::Result<Check> {
        Ok(Check::from(self))
    }
}

impl<T, E> IntoCheck for Result<T, E>
where
    T: IntoCheck,
    E: Into<anyhow::Error>,
{
    fn into_check(self) -> anyhow::Result<Check> {
        self.map_err(Into::into)?.into_check()
    }
}

/// Return shapes a transformation may answer with.
pub trait IntoGrid {
    fn into_grid(self) -> anyhow::Result<Grid>;
}

impl IntoGrid for Grid {
    fn into_grid(self) -> anyhow::Result<Grid> {
        Ok(self)
    }
}

impl IntoGrid for Vec<Vec<u8>> {
    fn into_grid(self) -> anyhow::Result<Grid> {
        Ok(Grid::new(self)?)
    }
}

impl<T, E> IntoGrid for Result<T, E>
where
    T: IntoGrid,
    E: Into<anyhow::Error>,
{
    fn into_grid(self) -> anyhow::Result<Grid> {
        self.map_err(Into::into)?.into_grid()
    }
}

impl<F, R> Hypothesis for F
where
    F: Fn(&Grid, &Grid) -> R + Send + Sync,
    R: IntoCheck,
{
    fn check(&self, input: &Grid, output: &Grid) -> anyhow::Result<Check> {
        self(input, output).into_check()
    }
}

impl<F, R> Transformation for F
where
    F: Fn(&Grid) -> R + Send + Sync,
    R: IntoGrid,
{
    fn apply(&self, input: &Grid) -> anyhow::Result<Grid> {
        self(input).into_grid()
    }
}
