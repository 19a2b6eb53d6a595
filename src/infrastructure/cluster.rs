//! Live cluster namespace source

use std::path::PathBuf;
use std::time::Duration;

use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{Api, ListParams},
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};
use tracing::{debug, instrument};

use crate::domain::Resource;
use crate::infrastructure::namespace::resource_from_meta;
use crate::infrastructure::traits::NamespaceSource;
use crate::infrastructure::{InfraError, InfraResult};

/// Default timeout for Kubernetes API requests.
const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Lists namespaces from the cluster selected by a kubeconfig.
#[derive(Debug, Clone)]
pub struct ClusterSource {
    /// Explicit kubeconfig; `None` uses `$KUBECONFIG` or `~/.kube/config`
    kubeconfig: Option<PathBuf>,
    /// Context override; `None` uses the kubeconfig's current context
    context: Option<String>,
    annotation: String,
}

impl ClusterSource {
    pub fn new(
        kubeconfig: Option<PathBuf>,
        context: Option<String>,
        annotation: impl Into<String>,
    ) -> Self {
        Self {
            kubeconfig,
            context,
            annotation: annotation.into(),
        }
    }

    async fn client(&self) -> InfraResult<Client> {
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..Default::default()
        };
        let mut config = match &self.kubeconfig {
            Some(path) => {
                debug!("client: kubeconfig={}", path.display());
                let kubeconfig = Kubeconfig::read_from(path)?;
                Config::from_custom_kubeconfig(kubeconfig, &options).await?
            }
            None => Config::from_kubeconfig(&options).await?,
        };
        config.read_timeout = Some(DEFAULT_API_TIMEOUT);
        debug!("client: cluster_url={}", config.cluster_url);
        Ok(Client::try_from(config)?)
    }

    async fn list(&self) -> InfraResult<Vec<Resource>> {
        let client = self.client().await?;
        let api: Api<Namespace> = Api::all(client);
        let list = api.list(&ListParams::default()).await?;
        debug!("list: {} namespaces", list.items.len());
        Ok(list
            .items
            .iter()
            .filter_map(|ns| resource_from_meta(&ns.metadata, &self.annotation))
            .collect())
    }
}

impl NamespaceSource for ClusterSource {
    #[instrument(level = "debug", skip(self), fields(context = ?self.context))]
    fn fetch(&self) -> InfraResult<Vec<Resource>> {
        // One blocking call, no need for a multi-threaded runtime
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(InfraError::Runtime)?;
        runtime.block_on(self.list())
    }
}
