use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;

/// 路径片段编码规则，与浏览器 `encodeURIComponent` 保留的字符一致
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 后端接口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `POST /api/validate`
    Validate,
    /// `POST /api/download`
    Download,
    /// `GET /api/status/{task_id}`
    Status(&'a str),
    /// `GET /api/history`
    History,
    /// `DELETE /api/history/{filename}`
    HistoryFile(&'a str),
    /// `GET /downloads/{filename}`
    File(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Validate | Endpoint::Download => Method::POST,
            Endpoint::HistoryFile(_) => Method::DELETE,
            Endpoint::Status(_) | Endpoint::History | Endpoint::File(_) => {
                Method::GET
            }
        }
    }

    /// 路径参数（任务 id 或文件名），没有参数的接口返回 `None`
    pub fn segment(&self) -> Option<&str> {
        match self {
            Endpoint::Status(s) | Endpoint::HistoryFile(s) | Endpoint::File(s) => {
                Some(*s)
            }
            _ => None,
        }
    }

    /// 路径参数不能为空，也不能是 `.` / `..`（编码后仍会被 URL 解析为目录跳转）
    pub fn has_valid_segment(&self) -> bool {
        match self.segment() {
            None => true,
            Some(s) => !s.is_empty() && s != "." && s != "..",
        }
    }

    /// 相对后端根地址的路径，不以 "/" 开头
    pub fn path(&self) -> String {
        match self {
            Endpoint::Validate => "api/validate".to_string(),
            Endpoint::Download => "api/download".to_string(),
            Endpoint::Status(task_id) => {
                format!("api/status/{}", encode_segment(task_id))
            }
            Endpoint::History => "api/history".to_string(),
            Endpoint::HistoryFile(filename) => {
                format!("api/history/{}", encode_segment(filename))
            }
            Endpoint::File(filename) => {
                format!("downloads/{}", encode_segment(filename))
            }
        }
    }
}

/// 编码单个路径片段
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
