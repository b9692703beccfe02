//! Keyword and action rule table
//!
//! Rules are checked in declaration order and the first match wins.

use bali_flex::{FlexError, Message};

use crate::content::{ContentContext, areas, bali, booking, company, investment, partners};

/// リッチメニューのアクション名
pub mod actions {
    pub const BALI_INFO: &str = "バリ島紹介";
    pub const PROPERTY_LIST: &str = "不動産一覧";
    pub const RENTAL_SERVICE: &str = "投資案件";
    pub const INSPECTION_BOOKING: &str = "視察予約";
    pub const PARTNER_COMPANIES: &str = "提携先企業";
    pub const COMPANY_INFO: &str = "会社概要";
}

/// Builds the reply for a matched rule
pub type Producer = fn(&ContentContext) -> Result<Message, FlexError>;

/// What a rule reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Postback data equal to this label
    Exact(&'static str),
    /// Text containing any of these substrings
    AnyOf(&'static [&'static str]),
}

impl Trigger {
    /// Case-sensitive substring check; `Exact` never matches free text
    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            Self::AnyOf(needles) => needles.iter().any(|n| text.contains(n)),
            Self::Exact(_) => false,
        }
    }

    pub fn matches_action(&self, data: &str) -> bool {
        match self {
            Self::Exact(label) => *label == data,
            Self::AnyOf(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub produce: Producer,
}

impl Rule {
    pub const fn new(name: &'static str, trigger: Trigger, produce: Producer) -> Self {
        Self {
            name,
            trigger,
            produce,
        }
    }
}

/// Ordered, immutable list of rules
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Keyword and rich menu rules of the property bot
    pub fn standard() -> Self {
        use actions::*;

        Self::new(vec![
            Rule::new("bali_info", Trigger::AnyOf(&["バリ島", "パリ島"]), bali::bali_info),
            Rule::new("property_list", Trigger::AnyOf(&["不動産"]), areas::property_list),
            Rule::new(
                "rental_investment",
                Trigger::AnyOf(&["投資"]),
                investment::rental_investment,
            ),
            Rule::new(
                "inspection_booking",
                Trigger::AnyOf(&["視察", "予約"]),
                booking::inspection_booking,
            ),
            Rule::new(
                "partner_companies",
                Trigger::AnyOf(&["提携", "企業"]),
                partners::partner_companies,
            ),
            Rule::new("company_info", Trigger::AnyOf(&["会社", "概要"]), company::company_info),
            Rule::new("bali_info", Trigger::Exact(BALI_INFO), bali::bali_info),
            Rule::new("property_list", Trigger::Exact(PROPERTY_LIST), areas::property_list),
            Rule::new(
                "rental_investment",
                Trigger::Exact(RENTAL_SERVICE),
                investment::rental_investment,
            ),
            Rule::new(
                "inspection_booking",
                Trigger::Exact(INSPECTION_BOOKING),
                booking::inspection_booking,
            ),
            Rule::new(
                "partner_companies",
                Trigger::Exact(PARTNER_COMPANIES),
                partners::partner_companies,
            ),
            Rule::new("company_info", Trigger::Exact(COMPANY_INFO), company::company_info),
        ])
    }

    /// First keyword rule whose substrings occur in `text`
    pub fn match_text(&self, text: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.trigger.matches_text(text))
    }

    /// Rule whose action label equals `data`
    pub fn match_action(&self, data: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.trigger.matches_action(data))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let table = RuleTable::standard();
        // 「不動産投資」は不動産と投資の両方を含む
        assert_eq!(table.match_text("不動産投資").map(|r| r.name), Some("property_list"));
        assert_eq!(table.match_text("バリ島の会社").map(|r| r.name), Some("bali_info"));
        assert_eq!(table.match_text("パリ島").map(|r| r.name), Some("bali_info"));
    }

    #[test]
    fn test_keyword_rules() {
        let table = RuleTable::standard();
        assert_eq!(table.match_text("投資について").map(|r| r.name), Some("rental_investment"));
        assert_eq!(table.match_text("予約したい").map(|r| r.name), Some("inspection_booking"));
        assert_eq!(table.match_text("提携先").map(|r| r.name), Some("partner_companies"));
        assert_eq!(table.match_text("概要").map(|r| r.name), Some("company_info"));
        assert!(table.match_text("hello").is_none());
    }

    #[test]
    fn test_action_rules_are_exact() {
        let table = RuleTable::standard();
        assert_eq!(
            table.match_action(actions::PROPERTY_LIST).map(|r| r.name),
            Some("property_list")
        );
        assert!(table.match_action("不動産").is_none());
        assert!(table.match_action("不動産一覧 ").is_none());
        assert!(table.match_action("area=canggu").is_none());
    }

    #[test]
    fn test_text_never_matches_exact_rules() {
        let table = RuleTable::new(vec![Rule::new(
            "only_exact",
            Trigger::Exact("会社概要"),
            company::company_info,
        )]);
        assert!(table.match_text("会社概要").is_none());
    }

    #[test]
    fn test_every_standard_rule_produces() {
        let ctx = ContentContext::new("http://localhost:3000");
        for rule in RuleTable::standard().rules() {
            assert!((rule.produce)(&ctx).is_ok(), "rule {} failed", rule.name);
        }
    }
}
