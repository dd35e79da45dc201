use crate::domain::{FetchResult, RankedItem, RenderedArtifacts};
use crate::error::Result;
use chrono::{DateTime, NaiveDateTime};
use html_escape::encode_text;

/// Static report shell. The only dynamic parts are the update-time line
/// and the two list bodies.
const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>今日热榜 - 知乎 &amp; 微博</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
                'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
                sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
        }

        .header {
            text-align: center;
            color: white;
            margin-bottom: 40px;
        }

        .header h1 {
            font-size: 2.5em;
            margin-bottom: 10px;
            text-shadow: 2px 2px 4px rgba(0,0,0,0.3);
        }

        .header p {
            font-size: 1.1em;
            opacity: 0.9;
        }

        .content {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 30px;
            margin-bottom: 40px;
        }

        @media (max-width: 768px) {
            .content {
                grid-template-columns: 1fr;
            }
        }

        .section {
            background: white;
            border-radius: 12px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.2);
            overflow: hidden;
        }

        .section-header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 20px;
            font-size: 1.5em;
            font-weight: bold;
            display: flex;
            align-items: center;
            gap: 10px;
        }

        .section-header.zhihu {
            background: linear-gradient(135deg, #0084ff 0%, #0066cc 100%);
        }

        .section-header.weibo {
            background: linear-gradient(135deg, #ff6600 0%, #ff3300 100%);
        }

        .list {
            list-style: none;
        }

        .list-item {
            padding: 15px 20px;
            border-bottom: 1px solid #f0f0f0;
            display: flex;
            align-items: center;
            gap: 15px;
            transition: background-color 0.3s;
        }

        .list-item:hover {
            background-color: #f9f9f9;
        }

        .list-item:last-child {
            border-bottom: none;
        }

        .rank {
            font-weight: bold;
            font-size: 1.2em;
            color: #667eea;
            min-width: 30px;
            text-align: center;
        }

        .item-content {
            flex: 1;
        }

        .item-title {
            font-size: 1em;
            color: #333;
            margin-bottom: 5px;
            line-height: 1.4;
        }

        .item-heat {
            font-size: 0.85em;
            color: #999;
        }

        .footer {
            text-align: center;
            color: white;
            padding: 20px;
            font-size: 0.9em;
        }

        .footer a {
            color: white;
            text-decoration: underline;
        }

        .emoji {
            font-size: 1.2em;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 今日热榜</h1>
            <p>知乎 &amp; 微博热榜前十</p>
            <p style="font-size: 0.9em; margin-top: 10px;">更新时间: {{timestamp}}</p>
        </div>

        <div class="content">
            <div class="section">
                <div class="section-header zhihu">
                    <span class="emoji">💡</span>
                    <span>知乎热榜</span>
                </div>
                <ul class="list">
                    {{zhihu_items}}
                </ul>
            </div>

            <div class="section">
                <div class="section-header weibo">
                    <span class="emoji">🔥</span>
                    <span>微博热搜</span>
                </div>
                <ul class="list">
                    {{weibo_items}}
                </ul>
            </div>
        </div>

        <div class="footer">
            <p>数据来源: <a href="https://tophub.today/c/news">TopHub 今日热榜</a></p>
            <p style="margin-top: 10px;">自动生成 | 每日更新</p>
        </div>
    </div>
</body>
</html>
"#;

const EMPTY_ROW: &str = r#"<li class="list-item"><div style="color: #999;">暂无数据</div></li>"#;

/// Pure renderer: identical input produces byte-identical artifacts, and
/// no input can make it fail short of the result not serializing at all.
#[derive(Default)]
pub struct RenderService;

impl RenderService {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, result: &FetchResult) -> Result<RenderedArtifacts> {
        let html = REPORT_TEMPLATE
            .replace("{{timestamp}}", &display_timestamp(&result.timestamp))
            .replace("{{zhihu_items}}", &render_rows(&result.zhihu))
            .replace("{{weibo_items}}", &render_rows(&result.weibo));

        let json = serde_json::to_string_pretty(result)?;

        Ok(RenderedArtifacts { html, json })
    }
}

fn render_rows(items: &[RankedItem]) -> String {
    if items.is_empty() {
        return EMPTY_ROW.to_string();
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                concat!(
                    "<li class=\"list-item\">\n",
                    "    <div class=\"rank\">{rank}</div>\n",
                    "    <div class=\"item-content\">\n",
                    "        <div class=\"item-title\">{title}</div>\n",
                    "        <div class=\"item-heat\">{heat}</div>\n",
                    "    </div>\n",
                    "</li>"
                ),
                rank = i + 1,
                title = encode_text(&item.title),
                heat = encode_text(&item.heat),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `2026年08月07日 12:30:00`-style display form; unparseable stamps pass
/// through untouched.
fn display_timestamp(raw: &str) -> String {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return stamp.format("%Y年%m月%d日 %H:%M:%S").to_string();
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return stamp.format("%Y年%m月%d日 %H:%M:%S").to_string();
    }
    raw.to_string()
}
