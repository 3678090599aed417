use crate::error::ScriptOpError;
use ortx_domain::constants::{DESCRIPTOR_VERSION, OP_DOMAIN, OP_DOMAIN_CSTR};
use ortx_domain::descriptor::{ElementType, OpKey, OpSchema};
use std::ffi::{CString, c_char};

/// One scripting-backed operator, as stored by the subsystem.
///
/// Instances are created from an [`OpSchema`] at registration time and are immutable
/// afterwards, which keeps the matching [`RawOpDescriptor`] pointers valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpDescriptor {
    name: Box<str>,
    c_name: CString,
    since_version: u32,
    inputs: Box<[ElementType]>,
    outputs: Box<[ElementType]>,
}

impl OpDescriptor {
    /// Always [`OP_DOMAIN`].
    #[must_use]
    pub const fn domain(&self) -> &'static str {
        OP_DOMAIN
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn since_version(&self) -> u32 {
        self.since_version
    }

    #[must_use]
    pub fn inputs(&self) -> &[ElementType] {
        &self.inputs
    }

    #[must_use]
    pub fn outputs(&self) -> &[ElementType] {
        &self.outputs
    }

    #[must_use]
    pub fn key(&self) -> OpKey {
        OpKey::contrib(&*self.name, self.since_version)
    }

    /// The schema this descriptor was built from.
    #[must_use]
    pub fn to_schema(&self) -> OpSchema {
        OpSchema::new(&*self.name)
            .since_version(self.since_version)
            .inputs(self.inputs.iter().copied())
            .outputs(self.outputs.iter().copied())
    }

    /// C view of this descriptor; borrows the heap buffers owned by `self`.
    pub(crate) fn raw(&self) -> RawOpDescriptor {
        RawOpDescriptor {
            version: DESCRIPTOR_VERSION,
            domain: OP_DOMAIN_CSTR.as_ptr(),
            name: self.c_name.as_ptr(),
            since_version: self.since_version,
            input_count: self.inputs.len(),
            input_types: self.inputs.as_ptr(),
            output_count: self.outputs.len(),
            output_types: self.outputs.as_ptr(),
        }
    }
}

impl TryFrom<OpSchema> for OpDescriptor {
    type Error = ScriptOpError;

    fn try_from(schema: OpSchema) -> Result<Self, Self::Error> {
        validate(&schema)?;

        let OpSchema { name, since_version, inputs, outputs } = schema;
        let c_name = CString::new(name.as_bytes()).map_err(|e| ScriptOpError::InvalidSchema {
            message: e.to_string().into(),
            context: Some(format!("operator '{name}'").into()),
        })?;

        Ok(Self {
            name: name.into_boxed_str(),
            c_name,
            since_version,
            inputs: inputs.into_boxed_slice(),
            outputs: outputs.into_boxed_slice(),
        })
    }
}

fn validate(schema: &OpSchema) -> Result<(), ScriptOpError> {
    let invalid = |message: String| ScriptOpError::InvalidSchema {
        message: message.into(),
        context: Some(format!("operator '{}'", schema.name.escape_debug()).into()),
    };

    if schema.name.is_empty() {
        return Err(invalid("name must not be empty".to_owned()));
    }
    if let Some(ch) = schema.name.chars().find(|c| c.is_whitespace() || *c == '\0') {
        return Err(invalid(format!("name contains forbidden character {ch:?}")));
    }
    if schema.since_version == 0 {
        return Err(invalid("since_version starts at 1".to_owned()));
    }
    if schema.outputs.is_empty() {
        return Err(invalid("at least one output is required".to_owned()));
    }
    Ok(())
}

/// C layout of a descriptor record, handed to hosts as a contiguous array.
///
/// Every pointer refers to storage owned by the sealed catalog and stays valid for
/// the rest of the process. `input_types`/`output_types` point at `int32_t` ONNX
/// element type codes; with a zero count they are dangling but never null.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawOpDescriptor {
    pub version: u32,
    pub domain: *const c_char,
    pub name: *const c_char,
    pub since_version: u32,
    pub input_count: usize,
    pub input_types: *const ElementType,
    pub output_count: usize,
    pub output_types: *const ElementType,
}

// SAFETY: the pointers target immutable data (a `'static` C string and buffers owned by
// a sealed catalog that is never mutated), so sharing the records across threads is sound.
#[allow(unsafe_code)]
unsafe impl Send for RawOpDescriptor {}
#[allow(unsafe_code)]
unsafe impl Sync for RawOpDescriptor {}
