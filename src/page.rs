//! HTML pages for the two dashboard variants.

use crate::state;
use chrono::{DateTime, Local};

/// Fixed page served by the static variant.
///
/// Embedded at compile time; every request returns identical bytes.
pub fn static_page() -> &'static str {
    include_str!("static_page.html")
}

/// Render the live dashboard with the dynamic fields interpolated.
///
/// Rendering cannot fail; the caller supplies the hostname looked up at
/// startup and the counter value for this request.
pub fn render_live(hostname: &str, visits: u64, now: &DateTime<Local>) -> String {
    let timestamp = now.format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>DevOps CI/CD Pipeline</title>
  <style>
    body {{
      margin: 0;
      font-family: Arial, sans-serif;
      background: linear-gradient(135deg, #0f2027, #203a43, #2c5364);
      color: white;
      display: flex;
      justify-content: center;
      align-items: center;
      height: 100vh;
      text-align: center;
    }}
    .card {{
      background: rgba(255,255,255,0.1);
      padding: 40px;
      border-radius: 15px;
      box-shadow: 0 10px 25px rgba(0,0,0,0.4);
      backdrop-filter: blur(10px);
    }}
    h1 {{
      font-size: 40px;
      margin-bottom: 10px;
    }}
    p {{
      font-size: 18px;
      opacity: 0.9;
    }}
    .badge {{
      margin-top: 20px;
      padding: 10px 20px;
      background: #00ffcc;
      color: #000;
      border-radius: 25px;
      font-weight: bold;
      display: inline-block;
    }}
    .meta {{
      margin-top: 25px;
      font-size: 15px;
      opacity: 0.8;
    }}
  </style>
</head>
<body>
  <div class="card">
    <h1>🚀 DevOps CI/CD Pipeline</h1>
    <p>Successfully deployed on <b>AWS EKS</b> using Jenkins, Docker &amp; Kubernetes.</p>
    <div class="badge">STATUS: RUNNING ✅</div>
    <div class="meta">
      <p>Version: {version}</p>
      <p>Hostname: {hostname}</p>
      <p>Visitors: {visits}</p>
      <p>Served at: {timestamp}</p>
    </div>
  </div>
</body>
</html>
"#,
        version = state::VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_page_is_stable() {
        assert_eq!(static_page().as_bytes(), static_page().as_bytes());
        assert!(static_page().contains("STATUS: RUNNING"));
        // No interpolation markers may leak into the fixed page
        assert!(!static_page().contains("Visitors:"));
    }

    #[test]
    fn test_live_page_interpolates_fields() {
        let now = Local::now();
        let html = render_live("build-01", 42, &now);
        assert!(html.contains("Version: v2.0"));
        assert!(html.contains("Hostname: build-01"));
        assert!(html.contains("Visitors: 42"));
        assert!(html.contains(&format!("Served at: {}", now.format("%Y-%m-%d %H:%M:%S"))));
    }

    #[test]
    fn test_live_page_version_is_constant() {
        let now = Local::now();
        let first = render_live("a", 1, &now);
        let second = render_live("b", 2, &now);
        assert!(first.contains("Version: v2.0"));
        assert!(second.contains("Version: v2.0"));
    }
}
