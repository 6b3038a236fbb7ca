//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use cloudflare_dns_client::{CloudflareClient, Config, DnsRecord, RecordSearch};
use wiremock::MockServer;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub const TEST_EMAIL: &str = "user@example.com";
pub const TEST_KEY: &str = "c2547eb745079dac9320b638f5e225cf483cc5cfdda41";

/// 指向 mock server 的客户端
pub fn mock_client(server: &MockServer) -> CloudflareClient {
    let config = Config::new(TEST_EMAIL, TEST_KEY, "", false)
        .expect("valid test config")
        .with_base_url(server.uri());
    CloudflareClient::new(config).expect("http client")
}

/// `{"success": true, ...}` 响应体
pub fn ok_envelope(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
    })
}

/// `{"success": false, ...}` 响应体
pub fn error_envelope(code: u64, message: &str) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null,
    })
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装真实客户端和测试域名
pub struct TestContext {
    pub client: CloudflareClient,
    pub domain: String,
    pub zone_id: Option<String>,
}

impl TestContext {
    /// 从环境变量创建 Cloudflare 测试上下文
    pub fn cloudflare() -> Option<Self> {
        let email = env::var("CLOUDFLARE_EMAIL").ok()?;
        let key = env::var("CLOUDFLARE_API_KEY").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let config = Config::new(email, key, "", false).ok()?;
        let client = CloudflareClient::new(config).ok()?;

        Some(Self {
            client,
            domain,
            zone_id: None,
        })
    }

    /// 查找测试域名的 `zone_id`
    pub async fn find_zone_id(&mut self) -> Option<String> {
        if self.zone_id.is_some() {
            return self.zone_id.clone();
        }

        let zones = self.client.zones().get().await.ok()?;
        let zone = zones.into_iter().find(|z| z.name == self.domain)?;
        self.zone_id = Some(zone.id.clone());
        Some(zone.id)
    }

    /// 完整记录名（`_test-xxxx.example.com`）
    pub fn fqdn(&self, relative: &str) -> String {
        format!("{relative}.{}", self.domain)
    }

    /// 创建测试 TXT 记录并返回创建的记录
    pub async fn create_test_record(&self, zone_id: &str) -> Option<DnsRecord> {
        let record = DnsRecord {
            ttl: Some(600),
            ..DnsRecord::new(
                "TXT",
                self.fqdn(&generate_test_record_name()),
                "integration-test",
            )
        };

        self.client.dns_records().create(zone_id, &record).await.ok()
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, zone_id: &str, record: &DnsRecord) {
        let _ = self.client.dns_records().delete(zone_id, record).await;
    }

    /// 查找并清理所有测试记录（以 _test- 开头的 TXT 记录）
    pub async fn cleanup_all_test_records(&self, zone_id: &str) {
        let search = RecordSearch::new("TXT", "", "", 0, 0);
        if let Ok(records) = self.client.dns_records().search(zone_id, &search).await {
            for record in records {
                if record.name.as_deref().is_some_and(|n| n.starts_with("_test-")) {
                    let _ = self.client.dns_records().delete(zone_id, &record).await;
                }
            }
        }
    }
}
