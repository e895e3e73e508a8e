//! Provider resolution: fan-out, then join in submission order

use crate::error::ComposeError;
use crate::layer::Layer;
use crate::select::{Invocation, InvocationKind};

/// Run every invocation and return the per-invocation layer lists.
///
/// All invocations are started together; results are collected by
/// position, never by completion time, so the output order is exactly the
/// selector's submission order. The first failing invocation aborts the
/// whole composition with no partial result.
pub(crate) async fn resolve(invocations: Vec<Invocation>) -> Result<Vec<Vec<Layer>>, ComposeError> {
    let mut tasks = Vec::with_capacity(invocations.len());

    for invocation in invocations {
        let concern = invocation.concern;
        let handle = match invocation.kind {
            InvocationKind::Sync(produce) => tokio::spawn(async move { Ok(produce()) }),
            InvocationKind::Deferred(future) => tokio::spawn(future),
        };
        tasks.push((concern, handle));
    }

    let mut lists = Vec::with_capacity(tasks.len());
    for (concern, handle) in tasks {
        match handle.await {
            Ok(Ok(layers)) => lists.push(layers),
            Ok(Err(err)) => return Err(err.for_concern(concern)),
            Err(_) => return Err(ComposeError::ProviderPanic { concern }),
        }
    }

    Ok(lists)
}
