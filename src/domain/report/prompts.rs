use crate::domain::news::NewsItem;
use chrono::NaiveDate;

/// Number of most recently fetched items handed to the analysts
pub const NEWS_BLOCK_SIZE: usize = 50;

/// An analyst role and the focus instructions given to it
#[derive(Debug, Clone, Copy)]
pub struct Persona {
    pub role: &'static str,
    pub instructions: &'static str,
}

pub const MACRO_ECONOMIST: Persona = Persona {
    role: "Macro Economist",
    instructions: "\
- Focus on macro issues: exchange rates, interest rates, oil prices, wars and diplomatic disputes.
- Predict how these issues will affect the Korean financial market as a whole.
- Diagnose the short-term market mood (bull or bear).",
};

pub const SECTOR_SPECIALIST: Persona = Persona {
    role: "Sector Specialist Analyst",
    instructions: "\
- Identify the specific industries mentioned in the news (semiconductors, batteries, autos, defense and so on).
- Clearly separate the sectors that benefit from each issue from the ones that suffer.
- Include concrete company names (tickers) where the news mentions them.",
};

pub const RISK_MANAGER: Persona = Persona {
    role: "Risk Manager",
    instructions: "\
- Critically analyze risks and negative factors investors tend to overlook.
- Lay out concrete risk scenarios that guard against blind buying.
- Warn about any sector where the market should wait and watch.",
};

/// Numbered `"{i}. [{source}] {title}"` lines for the `NEWS_BLOCK_SIZE` items
/// fetched most recently.
pub fn render_news_block(news: &[NewsItem]) -> String {
    let mut latest: Vec<&NewsItem> = news.iter().collect();
    latest.sort_by(|a, b| b.fetched_at.cmp(&a.fetched_at));

    latest
        .into_iter()
        .take(NEWS_BLOCK_SIZE)
        .enumerate()
        .map(|(i, item)| format!("{}. [{}] {}\n", i + 1, item.source, item.title))
        .collect()
}

pub fn persona_prompt(persona: &Persona, today: NaiveDate, news_block: &str) -> String {
    format!(
        "Today's date is **{today}**.
You are a {role}.
Using the news below, write an analysis report focused on your area of expertise.

**News:**
{news_block}
**Analysis guidelines:**
{instructions}

**Output:**
Summarize the key points concisely as bullet points.
",
        today = today.format("%Y-%m-%d"),
        role = persona.role,
        news_block = news_block,
        instructions = persona.instructions,
    )
}

pub fn synthesis_prompt(
    today: NaiveDate,
    macro_analysis: &str,
    sector_analysis: &str,
    risk_analysis: &str,
) -> String {
    format!(
        r#"You are the **Chief Investment Officer** of an investment advisory firm.
Combine the reports submitted by your three experts (macro, sector, risk) into the final **Daily Stock Market Guide**.

---
**[Expert report 1: Macro economy]**
{macro_analysis}

**[Expert report 2: Sector analysis]**
{sector_analysis}

**[Expert report 3: Risk management]**
{risk_analysis}
---

**Requirements:**
1. Integrate the three reports logically. Connect them instead of listing them.
2. Where opinions conflict, adopt the more conservative view or compare the evidence on both sides.
3. Follow the Markdown layout below strictly.

**Final report layout (Markdown):**
# 📈 AI Stock Investment Guide ({today})

## 🌍 Market Weather & Key Issues
> One-line summary: (e.g. "Hopes of a US rate cut lift the market, semiconductors in focus")
* (macro summary)

## 🏭 Sector Forecast
### ☀️ Bullish (expected beneficiaries)
* **[Sector/theme]**: reason
  * *Related stocks: Samsung Electronics, SK hynix...*

### ☔ Bearish (caution)
* **[Sector/theme]**: reason
  * *Related stocks: ...*

## ⚠️ Risk Check
* (the risk manager's key warnings)

## 💡 Chief Strategist's Recommendation
* (concrete positioning such as buy, sell or hold)

---
**[Important: JSON data for visualization]**
At the **very end of the report**, include JSON data in the format below. It is used to draw the chart.
Always put it inside a Markdown code block tagged json.
Use "bullish" or "bearish" for sentiment. Score is an integer: 6 to 10 when bullish, 1 to 5 when bearish (strength of impact).
Tickers are real company names mentioned in the news.

```json
[
  {{
    "sector": "Semiconductors",
    "sentiment": "bullish",
    "score": 8,
    "reason": "Rising AI demand",
    "tickers": ["Samsung Electronics", "SK hynix"]
  }},
  {{
    "sector": "Secondary batteries",
    "sentiment": "bearish",
    "score": 3,
    "reason": "Slowing EV demand",
    "tickers": ["LG Energy Solution", "EcoPro"]
  }}
]
```
"#,
        today = today.format("%Y-%m-%d"),
        macro_analysis = macro_analysis,
        sector_analysis = sector_analysis,
        risk_analysis = risk_analysis,
    )
}
