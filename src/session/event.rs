/// A signal that stays pending until its consumer takes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot<T>
{
    value: Option<T>,
}

impl<T> OneShot<T>
{
    pub fn new() -> Self
    {
        Self { value: None }
    }

    /// Replaces any pending value.
    pub fn emit(&mut self, value: T)
    {
        self.value = Some(value);
    }

    pub fn peek(&self) -> Option<&T>
    {
        self.value.as_ref()
    }

    pub fn take(&mut self) -> Option<T>
    {
        self.value.take()
    }

    pub fn is_pending(&self) -> bool
    {
        self.value.is_some()
    }
}

impl<T> Default for OneShot<T>
{
    fn default() -> Self
    {
        Self::new()
    }
}
