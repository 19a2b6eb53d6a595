//! Mapping from Kubernetes namespace metadata to [`Resource`]

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::domain::Resource;

/// Annotation set by the Hierarchical Namespace Controller on subnamespaces.
pub const SUBNAMESPACE_OF_ANNOTATION: &str = "hnc.x-k8s.io/subnamespace-of";

/// Map namespace metadata to a resource, reading the parent from `annotation`.
///
/// Returns `None` for objects without a name.
pub fn resource_from_meta(meta: &ObjectMeta, annotation: &str) -> Option<Resource> {
    let name = meta.name.as_deref().filter(|n| !n.is_empty())?;
    let parent = meta
        .annotations
        .as_ref()
        .and_then(|a| a.get(annotation))
        .filter(|p| !p.is_empty())
        .cloned();
    Some(Resource {
        name: name.to_string(),
        parent,
    })
}
