use tickerlens_core::NewsItem;

pub fn by_symbol(s: &str) -> Option<Vec<NewsItem>> {
    let rows: &[(&str, &str, i64)] = match s {
        "AAPL" => &[
            ("Apple unveils new iPad mini", "Reuters", 1_729_152_000),
            ("Apple suppliers ramp up production", "Bloomberg", 1_729_148_400),
            ("What to expect from Apple earnings", "Yahoo Finance", 1_729_144_800),
            ("Apple shares edge higher", "MarketWatch", 1_729_141_200),
            ("Analysts lift Apple price targets", "Barron's", 1_729_137_600),
            ("Apple services revenue in focus", "CNBC", 1_729_134_000),
            ("Apple Vision Pro sales update", "The Verge", 1_729_130_400),
        ],
        "MSFT" => &[
            ("Microsoft expands AI partnership", "Reuters", 1_729_152_000),
            ("Microsoft cloud growth steady", "Bloomberg", 1_729_141_200),
        ],
        "TSLA" => &[("Tesla robotaxi event recap", "Reuters", 1_729_152_000)],
        "NOOPT" | "EMPTY" => &[("Small cap roundup", "Newswire", 1_729_152_000)],
        _ => return None,
    };
    rows.iter()
        .map(|&(title, publisher, ts)| {
            NewsItem::from_epoch(
                title,
                Some(publisher.to_string()),
                Some(format!(
                    "https://news.example.com/{}",
                    title.to_ascii_lowercase().replace(' ', "-")
                )),
                ts,
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .ok()
}
