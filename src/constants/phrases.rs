/// Replies shown when the proxy cannot be reached or answers with an error.
pub const FALLBACK_REPLIES: [&str; 5] = [
    "呀哈哈！你好呀！",
    "森林里今天天气真好呢～",
    "你找到宝箱了吗？",
    "呀哈哈哈～我藏得很好吧！",
    "森林的秘密可多着呢！",
];

/// Titles the user is addressed by, one drawn per character selection.
pub const HONORIFICS: [&str; 10] = [
    "勇者大人",
    "海拉鲁首席骑士",
    "讨伐者勋章获得者",
    "哈特诺村助教",
    "微妙的菜肴创始人",
    "业余呀哈哈网约车司机",
    "劳鲁亲传右手",
    "好像前往朋友身边啊",
    "老背包客",
    "不会说话的人",
];

pub const PROXY_INVALID_FORMAT: &str = "无效的消息格式";
pub const PROXY_LAST_NOT_USER: &str = "最后一条消息必须是用户消息";
pub const PROXY_UPSTREAM_FAILED: &str = "API 请求失败";
pub const PROXY_UNKNOWN_ERROR: &str = "未知错误";
pub const PROXY_UNKNOWN_KIND: &str = "UnknownError";
pub const PROXY_BODY_TOO_LARGE: &str = "请求体过大";
pub const PROXY_LENGTH_REQUIRED: &str = "缺少 Content-Length 请求头";
pub const PROXY_METHOD_NOT_ALLOWED: &str = "仅支持 POST 请求";
pub const PROXY_NOT_FOUND: &str = "接口不存在";
