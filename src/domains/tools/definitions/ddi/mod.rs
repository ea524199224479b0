//! DDI (DNS, DHCP and IPAM) tools backed by the Infoblox WAPI.

pub mod grid_members;
pub mod records;
pub mod zones;

pub use grid_members::{ListGridMembersParams, ListGridMembersTool};
pub use records::{ListRecordsParams, ListRecordsTool};
pub use zones::{ListZonesParams, ListZonesTool};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::core::config::InfobloxConfig;
    use crate::domains::infoblox::InfobloxClient;

    pub const WAPI_PATH: &str = "/wapi/v2.12";

    pub fn client_for(server: &MockServer) -> InfobloxClient {
        let config = InfobloxConfig::new(
            format!("{}{}", server.uri(), WAPI_PATH),
            "admin",
            "infoblox",
        )
        .with_breeds_url(format!("{}/api/v2/breeds", server.uri()));
        InfobloxClient::new(&config).unwrap()
    }

    /// Serve `body` for `GET {WAPI_PATH}/{object}`.
    pub async fn mount_json(server: &MockServer, object: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("{WAPI_PATH}/{object}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    /// Counts WARN and ERROR events seen by the subscriber it is layered on.
    #[derive(Clone, Default)]
    pub struct WarningCounter(Arc<AtomicUsize>);

    impl WarningCounter {
        pub fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl<S: Subscriber> Layer<S> for WarningCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() <= Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }
}
