//! Built-in rule data compiled into the binary.

/// Domains that are never blocked.
pub const WHITELIST: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "googlevideo.com",
    "gstatic.com",
    "googleapis.com",
    "googleusercontent.com",
    "youtubei.googleapis.com",
    "yt3.ggpht.com",
    "cloudflare.com",
    "cloudflareinsights.com",
    "cdn-cgi",
    "cloudflare.net",
    "cloudfront.net",
    "fastly.com",
    "fastlylb.net",
    "akamai.com",
    "akamaihd.net",
    "jwplayer.com",
    "jwpcdn.com",
    "vimeo.com",
    "vimeocdn.com",
    "dailymotion.com",
    "cdnjs.com",
    "jsdelivr.net",
    "unpkg.com",
    "bootstrap.com",
    "jquery.com",
    "fontawesome.com",
    "fonts.googleapis.com",
    "imgur.com",
    "fshare.vn",
    "cdn.fshare.vn",
    "drive.google.com",
];

/// CDN diagnostics and real-user-monitoring paths (Cloudflare).
pub const PROTOCOL_EXCEPTIONS: &[&str] = &["/cdn-cgi/", "/rum"];

/// Full-match URL patterns.
pub const PATTERNS: &[&str] = &[
    // Google Ads & Analytics
    r".*doubleclick\.net/.*",
    r".*googlesyndication\.com/.*",
    r".*google-analytics\.com/.*",
    r".*adservice\.google\.com/.*",
    r".*pagead2\.googlesyndication\.com/.*",
    r".*tpc\.googlesyndication\.com/.*",
    r".*g\.doubleclick\.net/.*",
    // Facebook Ads & Analytics
    r".*facebook\.com/tr/.*",
    r".*facebook\.com/*/ads/.*",
    r".*fbcdn\.net/*/ad\.php",
    r".*fbcdn\.net/*/ads/.*",
    // Amazon Ads
    r".*adtago\.s3\.amazonaws\.com/.*",
    r".*analyticsengine\.s3\.amazonaws\.com/.*",
    r".*amazon-adsystem\.com/.*",
    // AdColony
    r".*adcolony\.com/.*",
    r".*ads30\.adcolony\.com/.*",
    // Media.net
    r".*media\.net/.*",
    r".*static\.media\.net/.*",
    // Common ad networks
    r".*ads\.pubmatic\.com/.*",
    r".*adbrite\.com/.*",
    r".*exponential\.com/.*",
    r".*quantserve\.com/.*",
    r".*scorecardresearch\.com/.*",
    r".*zedo\.com/.*",
    r".*adsafeprotected\.com/.*",
    r".*teads\.tv/.*",
    r".*outbrain\.com/.*",
    r".*advertising\.com/.*",
    r".*adnxs\.com/.*",
    r".*criteo\.com/.*",
    r".*taboola\.com/.*",
    // Tracking & Analytics (generic)
    r".*analytics\.*/.*",
    r".*tracking\.*/.*",
    r".*tracker\.*/.*",
    r".*pixel\.*/.*",
    r".*telemetry\.*/.*",
    r".*metrics\.*/.*",
    r".*beacon\.*/.*",
    r".*collect\.*/.*",
    // Vietnamese ad networks
    r".*admicro\.vn/.*",
    r".*mc\.admicro\.vn/.*",
    r".*qc\.admicro\.vn/.*",
    r".*media\.admicro\.vn/.*",
    r".*ads\.nganluong\.vn/.*",
    // Mobile ad networks
    r".*applovin\.com/.*",
    r".*inmobi\.com/.*",
    r".*startapp\.com/.*",
    r".*appnext\.com/.*",
    // Session recording & product analytics
    r".*hotjar\.com/.*",
    r".*hotjar\.io/.*",
    r".*segment\.io/.*",
    r".*segment\.com/.*",
    r".*amplitude\.com/.*",
    r".*mixpanel\.com/.*",
    r".*fullstory\.com/.*",
    r".*logrocket\.com/.*",
    r".*clarity\.ms/.*",
    r".*heap\.io/.*",
    // TikTok Ads
    r".*ads\.tiktok\.com/.*",
    r".*ads-api\.tiktok\.com/.*",
    r".*analytics\.tiktok\.com/.*",
    // Twitter Ads
    r".*ads-twitter\.com/.*",
    r".*static\.ads-twitter\.com/.*",
    // LinkedIn, Pinterest, Reddit
    r".*ads\.linkedin\.com/.*",
    r".*ads\.pinterest\.com/.*",
    r".*events\.reddit\.com/.*",
    // Yahoo Ads
    r".*ads\.yahoo\.com/.*",
    r".*analytics\.yahoo\.com/.*",
    r".*gemini\.yahoo\.com/.*",
    // Yandex Ads
    r".*adfox\.yandex\.ru/.*",
    r".*metrika\.yandex\.ru/.*",
    // Unity Ads
    r".*unityads\.unity3d\.com/.*",
    r".*unity3d\.com/.*",
    // Device vendor ads & telemetry
    r".*ad\.xiaomi\.com/.*",
    r".*data\.mistat\.xiaomi\.com/.*",
    r".*ads\.oppomobile\.com/.*",
    r".*hicloud\.com/.*",
    r".*oneplus\.cn/.*",
    r".*oneplus\.net/.*",
    r".*samsungads\.com/.*",
    // Video ads
    r".*aniview\.com/.*",
    r".*vidoomy\.com/.*",
    r".*spotxchange\.com/.*",
    // Crypto miners
    r".*coin-hive\.com/.*",
    r".*coinhive\.com/.*",
    // Push notification spam
    r".*pushnotify\.xyz/.*",
    r".*push-assist\.com/.*",
    // Adult ads
    r".*exoclick\.com/.*",
    r".*juicyads\.com/.*",
    r".*popads\.net/.*",
    r".*popcash\.net/.*",
];

/// Path fragments typical of ad and tracker requests.
pub const PATH_HEURISTICS: &[&str] = &[
    "/ad/",
    "/ads/",
    "/advert",
    "/advertisement",
    "/tracking",
    "/analytics",
    "/pixel",
    "/telemetry",
    "/tracker",
    "/beacon",
    "/collect",
    "/log",
    "_ad.",
    "-ad.",
    ".ad.",
    "/ads.",
];

/// Path fragments of legitimate content that collide with the heuristics.
pub const EXCEPTION_MARKERS: &[&str] = &["/load/", "/read/", "/head", "/api/"];
