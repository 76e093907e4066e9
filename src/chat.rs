//! Canned travel-assistant replies matched by keyword.

use serde::{Deserialize, Serialize};

const GREETING: &str = "Xin chào! 👋 Tôi là trợ lý du lịch Việt Nam. Bạn muốn khám phá địa điểm nào?";
const HANOI: &str = "Hà Nội là thủ đô của Việt Nam! 🏛️ Nổi tiếng với Hồ Hoàn Kiếm, Văn Miếu, và phở ngon nhất cả nước!";
const HO_CHI_MINH: &str = "TP. Hồ Chí Minh là thành phố lớn nhất Việt Nam! 🌆 Có Nhà thờ Đức Bà, Chợ Bến Thành, và ẩm thực đường phố tuyệt vời!";
const DA_NANG: &str = "Đà Nẵng có bãi biển đẹp, Cầu Vàng nổi tiếng, và Bà Nà Hills! 🏖️ Là điểm đến tuyệt vời cho kỳ nghỉ!";
const HOI_AN: &str = "Hội An là phố cổ di sản UNESCO! 🏮 Đến đây thưởng thức cao lầu, bánh mì và ngắm đèn lồng đêm!";
const PHO: &str = "Phở là món ăn quốc dân của Việt Nam! 🍜 Phở Hà Nội thanh nhẹ, phở Sài Gòn đậm đà hơn!";
const WEATHER: &str = "Bạn có thể tìm kiếm địa điểm trên bản đồ để xem thời tiết hiện tại! ☀️";
const HELP: &str = "Tôi có thể giúp bạn: 🗺️ Tìm địa điểm du lịch, 🌤️ Xem thời tiết, 🍜 Gợi ý ẩm thực, 🏮 Thông tin văn hóa Việt Nam!";

const DEFAULT_REPLY: &str = "Tôi là trợ lý du lịch Việt Nam! 🇻🇳 Hãy hỏi tôi về các thành phố như Hà Nội, Đà Nẵng, Hội An, hay TP.HCM nhé!";

/// Keyword to reply, checked in order; the first keyword contained in the
/// message wins.
const REPLIES: &[(&str, &str)] = &[
    ("hello", GREETING),
    ("hi", GREETING),
    (
        "xin chào",
        "Xin chào bạn! 🇻🇳 Tôi có thể giúp bạn tìm hiểu về các địa điểm du lịch ở Việt Nam!",
    ),
    ("hanoi", HANOI),
    ("hà nội", HANOI),
    ("ho chi minh", HO_CHI_MINH),
    ("hồ chí minh", HO_CHI_MINH),
    (
        "saigon",
        "Sài Gòn (TP.HCM) là thành phố năng động nhất Việt Nam! 🌆 Đừng quên thử bánh mì và cà phê sữa đá!",
    ),
    ("da nang", DA_NANG),
    ("đà nẵng", DA_NANG),
    ("hoi an", HOI_AN),
    ("hội an", HOI_AN),
    ("pho", PHO),
    ("phở", PHO),
    ("weather", WEATHER),
    ("thời tiết", WEATHER),
    ("help", HELP),
    ("giúp", HELP),
];

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Accepted for compatibility with the web client; not used
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Reply to a chat message.
pub fn reply(message: &str) -> &'static str {
    let message = message.trim().to_lowercase();
    REPLIES
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map_or(DEFAULT_REPLY, |(_, text)| *text)
}
