//! Trait for model types that describe their own bindings.
use crate::binder::{Binder, BinderConfig};
use crate::error::Result;

/// A model type that knows its command name and option set, so a binder for
/// it can be built in one call instead of by imperative registration at every
/// use site.
pub trait ObjectModel: Sized + 'static {
    /// Name of the generated parser, also used when this model's command is
    /// attached to a parent as a child command.
    fn command_name() -> &'static str;

    /// Registers every option of this model on `binder`. Called exactly once
    /// per [`Binder::for_model`].
    fn define_bindings(binder: &mut Binder<Self>) -> Result<()>;
}

impl<M: ObjectModel> Binder<M> {
    /// Builds a binder pre-populated with the model's own bindings.
    pub fn for_model(config: BinderConfig) -> Result<Self> {
        let mut binder = Binder::new(M::command_name(), config);
        M::define_bindings(&mut binder)?;
        Ok(binder)
    }
}
