use crate::catalog::Catalog;
use crate::descriptor::{OpDescriptor, RawOpDescriptor};
use crate::error::ScriptOpError;
use fxhash::FxHashSet;
use ortx_domain::config::ScriptOpsConfig;
use ortx_domain::descriptor::{OpKey, OpSchema};
use parking_lot::Mutex;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, info, trace};

static GLOBAL: OnceLock<ScriptOps> = OnceLock::new();

/// Schemas handed over by adapters and not yet sealed into the catalog.
#[derive(Debug, Default)]
struct Pending {
    ops: Vec<OpDescriptor>,
    keys: FxHashSet<OpKey>,
    sealed: bool,
}

/// The scripting-operator subsystem: registration, discovery, toggle and dispatch gate.
///
/// All state is internally synchronized. A process uses the single instance returned by
/// [`ScriptOps::global`]; separate instances exist for embedding and tests.
#[derive(Debug)]
pub struct ScriptOps {
    enabled: AtomicBool,
    in_flight: AtomicUsize,
    pending: Mutex<Pending>,
    catalog: OnceLock<Catalog>,
}

impl Default for ScriptOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptOps {
    /// A fresh subsystem: enabled, nothing registered, not yet sealed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            in_flight: AtomicUsize::new(0),
            pending: Mutex::new(Pending::default()),
            catalog: OnceLock::new(),
        }
    }

    /// The process-wide instance, created on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Hands a scripting-backed operator over to the subsystem.
    ///
    /// Operators are discovered in registration order. Registration is accepted whether
    /// the subsystem is enabled or not, but only until the first discovery.
    ///
    /// # Errors
    /// * [`ScriptOpError::InvalidSchema`] if the schema fails validation.
    /// * [`ScriptOpError::Duplicate`] if the same name and version is already registered.
    /// * [`ScriptOpError::Sealed`] once discovery has run.
    pub fn register(&self, schema: OpSchema) -> Result<(), ScriptOpError> {
        let key = schema.key();
        let descriptor = OpDescriptor::try_from(schema)?;

        let mut pending = self.pending.lock();
        if pending.sealed {
            return Err(ScriptOpError::Sealed {
                message: "registration is closed after the first discovery".into(),
                context: Some(key.to_string().into()),
            });
        }
        if !pending.keys.insert(key.clone()) {
            return Err(ScriptOpError::Duplicate {
                message: "already registered".into(),
                context: Some(key.to_string().into()),
            });
        }

        debug!(op = %key, inputs = descriptor.inputs().len(), "Script operator registered");
        pending.ops.push(descriptor);
        Ok(())
    }

    fn catalog(&self) -> &Catalog {
        self.catalog.get_or_init(|| {
            let mut pending = self.pending.lock();
            pending.sealed = true;
            pending.keys.clear();
            let catalog = Catalog::seal(std::mem::take(&mut pending.ops));
            info!(count = catalog.len(), "Script operator catalog sealed");
            catalog
        })
    }

    /// Every registered operator, in registration order.
    ///
    /// The first call seals the catalog; the returned slice never changes afterwards and
    /// is unaffected by the enabled flag.
    pub fn fetch(&self) -> &[OpDescriptor] {
        self.catalog().ops()
    }

    /// The C view of [`ScriptOps::fetch`]. The slice pointer is never null, even when empty.
    pub fn fetch_raw(&self) -> &[RawOpDescriptor] {
        self.catalog().raw()
    }

    /// Whether discovery has already sealed the catalog.
    pub fn is_sealed(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Sets the enabled flag and returns its previous value.
    pub fn set_enabled(&self, enable: bool) -> bool {
        let previous = self.enabled.swap(enable, Ordering::SeqCst);
        if previous != enable {
            info!(enabled = enable, "Script operators {}", if enable { "enabled" } else { "disabled" });
        }
        previous
    }

    /// Same as `set_enabled(true)`.
    pub fn enable(&self) -> bool {
        self.set_enabled(true)
    }

    /// Same as `set_enabled(false)`.
    pub fn disable(&self) -> bool {
        self.set_enabled(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Applies the configured state through the toggle and returns the previous one.
    pub fn apply_config(&self, config: &ScriptOpsConfig) -> bool {
        self.set_enabled(config.enabled)
    }

    /// Admits one invocation of `op` if the subsystem is enabled.
    ///
    /// `op` must be a record returned by this instance's [`ScriptOps::fetch`]. The returned
    /// permit counts as in flight until dropped. Disabling afterwards never revokes it;
    /// only new dispatches are refused.
    ///
    /// # Errors
    /// * [`ScriptOpError::UnknownOp`] when `op` does not belong to this catalog.
    /// * [`ScriptOpError::Disabled`] when the subsystem is disabled.
    pub fn begin_dispatch(&self, op: &OpDescriptor) -> Result<DispatchPermit<'_>, ScriptOpError> {
        if !self.catalog.get().is_some_and(|catalog| catalog.contains(op)) {
            return Err(ScriptOpError::UnknownOp {
                message: "not discovered from this subsystem".into(),
                context: Some(op.key().to_string().into()),
            });
        }
        if !self.is_enabled() {
            return Err(Self::disabled(op));
        }

        // Re-checked after counting so a concurrent disable either sees this dispatch in
        // `in_flight` or refuses it.
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        if !self.is_enabled() {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            return Err(Self::disabled(op));
        }

        trace!(op = op.name(), "Script dispatch started");
        Ok(DispatchPermit { owner: self })
    }

    fn disabled(op: &OpDescriptor) -> ScriptOpError {
        ScriptOpError::Disabled {
            message: "dispatch refused".into(),
            context: Some(op.key().to_string().into()),
        }
    }

    /// Number of live [`DispatchPermit`]s.
    ///
    /// A dispatch racing a concurrent disable may be counted for an instant before it is
    /// refused; refusals on an already disabled subsystem are never counted.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Proof that a dispatch was admitted while the subsystem was enabled.
#[must_use = "The dispatch ends when the permit is dropped."]
#[derive(Debug)]
pub struct DispatchPermit<'a> {
    owner: &'a ScriptOps,
}

impl Drop for DispatchPermit<'_> {
    fn drop(&mut self) {
        self.owner.in_flight.fetch_sub(1, Ordering::SeqCst);
        trace!("Script dispatch finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortx_domain::descriptor::ElementType;

    fn schema(name: &str) -> OpSchema {
        OpSchema::new(name).input(ElementType::String).output(ElementType::String)
    }

    #[test]
    fn starts_enabled_and_unsealed() {
        let ops = ScriptOps::new();
        assert!(ops.is_enabled());
        assert!(!ops.is_sealed());
        assert_eq!(ops.in_flight(), 0);
    }

    #[test]
    fn first_fetch_seals() {
        let ops = ScriptOps::new();
        ops.register(schema("StringUpper")).expect("register");
        assert_eq!(ops.fetch().len(), 1);
        assert!(ops.is_sealed());

        let err = ops.register(schema("StringLower")).expect_err("sealed");
        assert!(matches!(err, ScriptOpError::Sealed { .. }));
        assert_eq!(ops.fetch().len(), 1);
    }

    #[test]
    fn duplicate_key_is_rejected_but_new_version_is_not() {
        let ops = ScriptOps::new();
        ops.register(schema("StringUpper")).expect("register");

        let err = ops.register(schema("StringUpper")).expect_err("duplicate");
        assert!(matches!(err, ScriptOpError::Duplicate { .. }));

        ops.register(schema("StringUpper").since_version(2)).expect("new version");
        assert_eq!(ops.fetch().len(), 2);
    }

    #[test]
    fn invalid_schema_leaves_state_untouched() {
        let ops = ScriptOps::new();
        let err = ops.register(OpSchema::new("NoOutputs")).expect_err("invalid");
        assert!(matches!(err, ScriptOpError::InvalidSchema { .. }));

        ops.register(schema("NoOutputs")).expect("same name, now valid");
        assert_eq!(ops.fetch().len(), 1);
    }

    #[test]
    fn permit_outlives_disable() {
        let ops = ScriptOps::new();
        ops.register(schema("StringUpper")).expect("register");
        let op = &ops.fetch()[0];

        let permit = ops.begin_dispatch(op).expect("enabled");
        assert_eq!(ops.in_flight(), 1);

        assert!(ops.disable());
        assert!(matches!(ops.begin_dispatch(op), Err(ScriptOpError::Disabled { .. })));
        assert_eq!(ops.in_flight(), 1);

        drop(permit);
        assert_eq!(ops.in_flight(), 0);
    }

    #[test]
    fn foreign_descriptors_are_rejected() {
        let ops = ScriptOps::new();
        let other = ScriptOps::new();
        ops.register(schema("StringUpper")).expect("register");
        other.register(schema("StringUpper")).expect("register");

        let foreign = &other.fetch()[0];
        let _ = ops.fetch();
        let err = ops.begin_dispatch(foreign).expect_err("belongs to another instance");
        assert!(matches!(err, ScriptOpError::UnknownOp { .. }));

        let copy = ops.fetch()[0].clone();
        assert!(matches!(ops.begin_dispatch(&copy), Err(ScriptOpError::UnknownOp { .. })));
        assert_eq!(ops.in_flight(), 0);
    }

    #[test]
    fn refusal_while_disabled_never_touches_the_count() {
        let ops = ScriptOps::new();
        ops.register(schema("StringUpper")).expect("register");
        let op = &ops.fetch()[0];
        ops.disable();

        for _ in 0..8 {
            assert!(matches!(ops.begin_dispatch(op), Err(ScriptOpError::Disabled { .. })));
            assert_eq!(ops.in_flight(), 0);
        }
    }

    #[test]
    fn apply_config_goes_through_toggle() {
        let ops = ScriptOps::new();
        assert!(ops.apply_config(&ScriptOpsConfig { enabled: false }));
        assert!(!ops.is_enabled());
        assert!(!ops.apply_config(&ScriptOpsConfig::default()));
        assert!(ops.is_enabled());
    }
}
