//! The [`DataPointer`] node: lazy resolution, caching, and materialization.
//!
//! A pointer is a self-similar tree node holding its own cache state.
//! Children are created through the same constructor, never subclassed;
//! a single node type plus the field-descriptor tree captures all shapes.
//!
//! # Caching contract
//!
//! - The payload downloads at most once per pointer until
//!   [`reset`](DataPointer::reset). The async payload lock is held across
//!   the download await, so accesses racing the first fetch share one
//!   in-flight download instead of issuing duplicates.
//! - A failed download is not cached; the next access retries in full.
//! - Each resolved field is memoized independently; one field's failure
//!   never disturbs another field's cache.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex as StdMutex};

use serde_json::Value;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, trace};

use orl_registry::{AdapterRegistry, RegistryError};
use orl_types::{Payload, Uri};

use crate::error::{PointerError, PointerResult};
use crate::field::{normalize, FieldDescriptor, FieldSpec};
use crate::snapshot::{Snapshot, SnapshotValue};

/// Resolved value of one declared field.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Terminal value; `None` when the field is declared but the backend
    /// payload carries no such key.
    Scalar(Option<Value>),
    /// Child pointer for a recursive field.
    Pointer(Arc<DataPointer>),
}

impl FieldValue {
    /// The terminal value, if this is a scalar field.
    pub fn as_scalar(&self) -> Option<&Option<Value>> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Pointer(_) => None,
        }
    }

    /// The child pointer, if this is a recursive field.
    pub fn as_pointer(&self) -> Option<&Arc<DataPointer>> {
        match self {
            Self::Pointer(child) => Some(child),
            Self::Scalar(_) => None,
        }
    }
}

/// One off-chain record: a URI plus a declared field schema.
///
/// Construction is cheap and performs no I/O, so pointers can be built
/// eagerly throughout a tree without fetch cost. The registry is injected
/// and shared with every child pointer.
pub struct DataPointer {
    uri: String,
    fields: Vec<FieldDescriptor>,
    registry: Arc<AdapterRegistry>,
    /// Fetch-once payload cache; the lock spans the download await.
    payload: AsyncMutex<Option<Arc<Payload>>>,
    /// Memoized terminal values, keyed by field name.
    scalars: StdMutex<HashMap<String, Option<Value>>>,
    /// Memoized child pointers, keyed by field name.
    children: StdMutex<HashMap<String, Arc<DataPointer>>>,
}

impl DataPointer {
    /// Create a pointer over `uri` with the declared field schema.
    ///
    /// Fails with [`PointerError::MissingReference`] on an empty URI and
    /// with [`PointerError::FieldNameConflict`] when two names in one field
    /// list collide case-insensitively. The URI's schema token is not
    /// checked against the registry until the first resolution.
    pub fn create(
        registry: Arc<AdapterRegistry>,
        uri: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> PointerResult<Arc<Self>> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(PointerError::MissingReference);
        }
        let fields = normalize(fields)?;
        Ok(Arc::new(Self::new(registry, uri, fields)))
    }

    /// Child constructor: descriptors are already normalized.
    fn new(registry: Arc<AdapterRegistry>, uri: String, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            uri,
            fields,
            registry,
            payload: AsyncMutex::new(None),
            scalars: StdMutex::new(HashMap::new()),
            children: StdMutex::new(HashMap::new()),
        }
    }

    /// The URI this pointer resolves.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The declared field schema, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|d| d.name == name)
    }

    /// Fetch the shared payload, memoizing it on success.
    ///
    /// Concurrent callers serialize on the payload lock: the first one
    /// downloads, the rest observe the cached result. A failure leaves the
    /// cache unset so the next access retries the full fetch.
    async fn payload(&self) -> PointerResult<Arc<Payload>> {
        let mut cached = self.payload.lock().await;
        if let Some(payload) = cached.as_ref() {
            trace!(uri = %self.uri, "payload cache hit");
            return Ok(payload.clone());
        }
        let uri = Uri::parse(&self.uri).map_err(RegistryError::from)?;
        let adapter = self.registry.adapter_for_schema(uri.schema())?;
        debug!(uri = %self.uri, "downloading off-chain record");
        let payload = adapter
            .download(&uri)
            .await
            .map_err(|source| PointerError::Download {
                uri: self.uri.clone(),
                source,
            })?;
        let payload = Arc::new(payload);
        *cached = Some(payload.clone());
        Ok(payload)
    }

    /// Resolve one declared field.
    ///
    /// The first access to any field triggers the pointer's single payload
    /// fetch; every field afterwards is served from it. Accessing an
    /// undeclared name fails with [`PointerError::UnknownField`] before any
    /// I/O happens.
    pub async fn field(&self, name: &str) -> PointerResult<FieldValue> {
        let descriptor = self
            .descriptor(name)
            .ok_or_else(|| PointerError::UnknownField {
                name: name.to_string(),
            })?
            .clone();
        if descriptor.recursive {
            Ok(FieldValue::Pointer(self.resolve_child(&descriptor).await?))
        } else {
            Ok(FieldValue::Scalar(self.resolve_scalar(&descriptor).await?))
        }
    }

    async fn resolve_scalar(&self, descriptor: &FieldDescriptor) -> PointerResult<Option<Value>> {
        if let Some(value) = self
            .scalars
            .lock()
            .expect("lock poisoned")
            .get(&descriptor.name)
        {
            return Ok(value.clone());
        }
        let payload = self.payload().await?;
        // A declared field absent from the payload memoizes as `None`; the
        // declaration alone makes it part of the record's shape.
        let value = payload.get(&descriptor.name).cloned();
        let mut scalars = self.scalars.lock().expect("lock poisoned");
        Ok(scalars
            .entry(descriptor.name.clone())
            .or_insert(value)
            .clone())
    }

    async fn resolve_child(&self, descriptor: &FieldDescriptor) -> PointerResult<Arc<DataPointer>> {
        if let Some(child) = self
            .children
            .lock()
            .expect("lock poisoned")
            .get(&descriptor.name)
        {
            return Ok(child.clone());
        }
        let payload = self.payload().await?;
        let uri = match payload.get(&descriptor.name) {
            Some(Value::String(raw)) => {
                Uri::parse(raw).map_err(|_| PointerError::InvalidReference {
                    field: descriptor.name.clone(),
                    value: format!("{raw:?}"),
                })?
            }
            Some(other) => {
                return Err(PointerError::InvalidReference {
                    field: descriptor.name.clone(),
                    value: other.to_string(),
                })
            }
            None => {
                return Err(PointerError::InvalidReference {
                    field: descriptor.name.clone(),
                    value: "missing".to_string(),
                })
            }
        };
        let child = Arc::new(Self::new(
            self.registry.clone(),
            uri.as_str().to_string(),
            descriptor.sub_fields.clone(),
        ));
        // A concurrent resolver may have won; keep the first child so every
        // caller shares one instance.
        let child = self
            .children
            .lock()
            .expect("lock poisoned")
            .entry(descriptor.name.clone())
            .or_insert(child)
            .clone();
        Ok(child)
    }

    /// Drop the payload and per-field caches, returning the pointer to its
    /// just-constructed state.
    ///
    /// Already-handed-out child pointers stay valid and keep their own
    /// caches; the next resolution pass derives brand-new children from
    /// fresh payload data.
    pub async fn reset(&self) {
        *self.payload.lock().await = None;
        self.scalars.lock().expect("lock poisoned").clear();
        self.children.lock().expect("lock poisoned").clear();
    }

    /// Materialize this pointer into a plain [`Snapshot`].
    ///
    /// - `None`: resolve every declared field to unbounded depth.
    /// - `Some(&[])`: resolve only this record's terminal fields; recursive
    ///   fields are reported as their raw reference strings.
    /// - `Some(paths)`: dotted paths select which recursive fields deepen.
    ///   Terminal fields resolve at every level touched. A recursive field
    ///   that is a path leaf resolves to full depth; one that is a path
    ///   prefix descends with the remaining segments; any other recursive
    ///   field stays a raw reference. Shared path prefixes reuse the
    ///   per-field memoization, so nothing downloads twice.
    ///
    /// Fails on the first failing requested path; no partial snapshot is
    /// produced on error. Paths naming undeclared fields are ignored.
    pub async fn to_plain_object(
        &self,
        selected_paths: Option<&[&str]>,
    ) -> PointerResult<Snapshot> {
        let selection = match selected_paths {
            None => Selection::All,
            Some(paths) => Selection::parse(paths)?,
        };
        self.materialize(selection).await
    }

    fn materialize(
        &self,
        selection: Selection,
    ) -> Pin<Box<dyn Future<Output = PointerResult<Snapshot>> + Send + '_>> {
        Box::pin(async move {
            let payload = self.payload().await?;
            let mut contents = BTreeMap::new();
            for descriptor in &self.fields {
                let value = if descriptor.recursive {
                    match selection.descend(&descriptor.name) {
                        Some(child_selection) => {
                            let child = self.resolve_child(descriptor).await?;
                            SnapshotValue::Tree(child.materialize(child_selection).await?)
                        }
                        None => match payload.get(&descriptor.name) {
                            None => SnapshotValue::Missing,
                            Some(Value::String(raw)) => SnapshotValue::Reference(raw.clone()),
                            // Not asked to resolve it, so report whatever the
                            // backend returned verbatim.
                            Some(other) => SnapshotValue::Scalar(other.clone()),
                        },
                    }
                } else {
                    match self.resolve_scalar(descriptor).await? {
                        Some(value) => SnapshotValue::Scalar(value),
                        None => SnapshotValue::Missing,
                    }
                };
                contents.insert(descriptor.name.clone(), value);
            }
            Ok(Snapshot {
                uri: self.uri.clone(),
                contents,
            })
        })
    }
}

impl std::fmt::Debug for DataPointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataPointer")
            .field("uri", &self.uri)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// How deep materialization may descend through recursive fields.
#[derive(Debug, Clone)]
enum Selection {
    /// Resolve everything below this level.
    All,
    /// Resolve only the named recursive fields, each with its own
    /// sub-selection.
    Paths(HashMap<String, Selection>),
}

impl Selection {
    fn parse(paths: &[&str]) -> PointerResult<Self> {
        let mut map = HashMap::new();
        for path in paths {
            if path.is_empty() || path.split('.').any(str::is_empty) {
                return Err(PointerError::InvalidPath {
                    path: path.to_string(),
                });
            }
            let segments: Vec<&str> = path.split('.').collect();
            insert_path(&mut map, &segments);
        }
        Ok(Self::Paths(map))
    }

    fn descend(&self, name: &str) -> Option<Selection> {
        match self {
            Self::All => Some(Self::All),
            Self::Paths(map) => map.get(name).cloned(),
        }
    }
}

fn insert_path(map: &mut HashMap<String, Selection>, segments: &[&str]) {
    match segments {
        [] => {}
        [leaf] => {
            // A path leaf resolves its field to full depth, which subsumes
            // any longer selection through the same field.
            map.insert((*leaf).to_string(), Selection::All);
        }
        [head, rest @ ..] => match map
            .entry((*head).to_string())
            .or_insert_with(|| Selection::Paths(HashMap::new()))
        {
            Selection::All => {}
            Selection::Paths(children) => insert_path(children, rest),
        },
    }
}
