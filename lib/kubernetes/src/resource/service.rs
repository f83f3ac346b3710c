use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ObjectMeta, Resource};

fn default_protocol() -> String {
    String::from("TCP")
}

fn default_type() -> String {
    String::from("ClusterIP")
}

/// ServicePort is k8s service port.
///
/// See https://kubernetes.io/docs/reference/generated/kubernetes-api/v1.31/#serviceport-v1-core
#[derive(Clone, Debug, Deserialize)]
pub struct ServicePort {
    /// The name of this port within the service. Optional if only one
    /// ServicePort is defined on this service.
    #[serde(default)]
    pub name: String,

    /// The IP protocol for this port. Supports "TCP", "UDP", and "SCTP". Default is TCP.
    #[serde(default = "default_protocol")]
    pub protocol: String,

    /// The port that will be exposed by this service.
    pub port: u16,
}

/// ServiceSpec is k8s service spec.
///
/// See https://kubernetes.io/docs/reference/generated/kubernetes-api/v1.31/#servicespec-v1-core
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceSpec {
    /// Route service traffic to pods with label keys and values matching this
    /// selector. If empty or not present, the service is assumed to have an
    /// external process managing its endpoints.
    #[serde(default)]
    pub selector: BTreeMap<String, String>,

    /// clusterIP is the IP address of the service and is usually assigned randomly.
    /// "None" makes a headless service.
    #[serde(default, rename = "clusterIP")]
    pub cluster_ip: Option<String>,

    /// externalName is the external reference that discovery mechanisms will return
    /// as an alias for this service. Requires `type` to be "ExternalName".
    #[serde(default, rename = "externalName")]
    pub external_name: Option<String>,

    /// type determines how the Service is exposed. Defaults to ClusterIP. Valid
    /// options are ExternalName, ClusterIP, NodePort, and LoadBalancer.
    #[serde(default = "default_type", rename = "type")]
    pub typ: String,

    /// The list of ports that are exposed by this service.
    #[serde(default)]
    pub ports: Vec<ServicePort>,
}

impl Default for ServiceSpec {
    fn default() -> Self {
        Self {
            selector: BTreeMap::new(),
            cluster_ip: None,
            external_name: None,
            typ: default_type(),
            ports: vec![],
        }
    }
}

/// Service is a named abstraction of software service (for example, mysql)
/// consisting of local port that the proxy listens on, and the selector that
/// determines which pods will answer requests sent through the proxy.
///
/// See https://kubernetes.io/docs/reference/generated/kubernetes-api/v1.31/#service-v1-core
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Service {
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: ServiceSpec,
}

impl Resource for Service {
    const KIND: &'static str = "Service";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ObjectList;

    #[test]
    fn deserialize() {
        let input = r#"{
  "kind": "ServiceList",
  "apiVersion": "v1",
  "metadata": {
    "selfLink": "/api/v1/services",
    "resourceVersion": "60485"
  },
  "items": [
    {
      "metadata": {
        "name": "kube-dns",
        "namespace": "kube-system",
        "selfLink": "/api/v1/namespaces/kube-system/services/kube-dns",
        "uid": "38a396f1-17fe-46c2-a5f4-3b225c18dcdf",
        "resourceVersion": "177",
        "creationTimestamp": "2020-03-16T20:44:26Z",
        "labels": {
          "k8s-app": "kube-dns",
          "kubernetes.io/cluster-service": "true",
          "kubernetes.io/name": "KubeDNS"
        },
        "annotations": {
          "prometheus.io/port": "9153",
          "prometheus.io/scrape": "true"
        }
      },
      "spec": {
        "ports": [
          {
            "name": "dns",
            "protocol": "UDP",
            "port": 53,
            "targetPort": 53
          },
          {
            "name": "dns-tcp",
            "protocol": "TCP",
            "port": 53,
            "targetPort": 53
          },
          {
            "name": "metrics",
            "port": 9153,
            "targetPort": 9153
          }
        ],
        "selector": {
          "k8s-app": "kube-dns"
        },
        "clusterIP": "10.96.0.10",
        "type": "ClusterIP",
        "sessionAffinity": "None"
      },
      "status": {
        "loadBalancer": {

        }
      }
    },
    {
      "metadata": {
        "name": "external",
        "namespace": "default"
      },
      "spec": {
        "type": "ExternalName",
        "externalName": "db.example.com"
      }
    }
  ]
}"#;

        let list = serde_json::from_str::<ObjectList<Service>>(input).unwrap();
        assert_eq!(list.metadata.resource_version, "60485");
        assert_eq!(list.items.len(), 2);

        let dns = &list.items[0];
        assert_eq!(dns.metadata().name, "kube-dns");
        assert_eq!(dns.metadata.namespace, "kube-system");
        assert_eq!(dns.metadata.labels.len(), 3);
        assert_eq!(dns.spec.selector.get("k8s-app").unwrap(), "kube-dns");
        assert_eq!(dns.spec.cluster_ip.as_deref(), Some("10.96.0.10"));
        assert_eq!(dns.spec.ports.len(), 3);
        assert_eq!(dns.spec.ports[2].protocol, "TCP");

        let external = &list.items[1];
        assert!(external.spec.selector.is_empty());
        assert_eq!(external.spec.typ, "ExternalName");
        assert_eq!(external.spec.external_name.as_deref(), Some("db.example.com"));
        assert!(external.spec.ports.is_empty());
    }

    #[test]
    fn constants() {
        assert_eq!(Service::KIND, "Service");
        assert_eq!(ServiceSpec::default().typ, "ClusterIP");
    }
}
