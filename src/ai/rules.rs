/// Локальные правила продавца-консультанта.
/// Упорядоченная таблица (условие, ответ): срабатывает первое подходящее правило.
use super::reply::{Reply, ReplyTemplate};
use crate::services::catalog::{Catalog, Category};

/// Условие срабатывания правила. Проверяется по тексту в нижнем регистре
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Текст начинается с одного из слов
    StartsWith(&'static [&'static str]),
    /// Текст содержит одно из слов
    Contains(&'static [&'static str]),
}

impl Trigger {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Trigger::StartsWith(words) => words.iter().any(|w| normalized.starts_with(w)),
            Trigger::Contains(words) => words.iter().any(|w| normalized.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub reply: ReplyTemplate,
}

const fn text_only(text: &'static str, suggestions: &'static [&'static str]) -> ReplyTemplate {
    ReplyTemplate { text, suggestions, categories: &[] }
}

pub const WELCOME: ReplyTemplate = text_only(
    "✨ Welcome to Luxe Diamonds! I'm here to help you find the perfect diamond jewellery. How can I assist you today?",
    &[
        "Show me engagement rings",
        "Browse necklaces",
        "View earrings",
        "What's on sale?",
        "Tell me about diamonds",
    ],
);

pub const FALLBACK: ReplyTemplate = text_only(
    "I'd be happy to help you with that! Our specialties include:\n\n💍 Engagement & Wedding Rings\n📿 Diamond Necklaces\n💎 Earrings & Studs\n⌚ Bracelets & Bangles\n\nWhat would you like to explore?",
    &[
        "Show all products",
        "Engagement rings",
        "Speak to expert",
        "Price information",
    ],
);

// Порядок важен: "engagement ring" должен попасть в engagement раньше, чем в rings,
// а "earrings" содержит "ring" и поэтому уходит в rings.
pub const LUXE_RULES: &[Rule] = &[
    Rule {
        name: "greeting",
        trigger: Trigger::StartsWith(&[
            "hi",
            "hello",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
        ]),
        reply: text_only(
            "Hello! 👋 Welcome to Luxe Diamonds. I'm excited to help you discover our stunning diamond collection. What are you looking for today?",
            &["Engagement rings", "Necklaces", "Earrings", "Bracelets", "Special occasions"],
        ),
    },
    Rule {
        name: "engagement",
        trigger: Trigger::Contains(&["engagement", "proposal"]),
        reply: ReplyTemplate {
            text: "💍 Congratulations on your upcoming engagement! Here are our most popular engagement rings:",
            suggestions: &["Tell me more", "Show other categories", "Price range options"],
            categories: &[Category::Rings],
        },
    },
    Rule {
        name: "rings",
        trigger: Trigger::Contains(&["ring"]),
        reply: ReplyTemplate {
            text: "💎 Here's our exquisite collection of diamond rings:",
            suggestions: &["Filter by price", "Show necklaces instead", "Diamond education"],
            categories: &[Category::Rings],
        },
    },
    Rule {
        name: "necklaces",
        trigger: Trigger::Contains(&["necklace", "pendant"]),
        reply: ReplyTemplate {
            text: "✨ Our stunning diamond necklaces:",
            suggestions: &["Show earrings", "Price details", "Customization options"],
            categories: &[Category::Necklaces],
        },
    },
    Rule {
        name: "earrings",
        trigger: Trigger::Contains(&["earring", "stud"]),
        reply: ReplyTemplate {
            text: "💫 Beautiful diamond earrings perfect for any occasion:",
            suggestions: &["Show bracelets", "Gift wrapping", "More details"],
            categories: &[Category::Earrings],
        },
    },
    Rule {
        name: "bracelets",
        trigger: Trigger::Contains(&["bracelet", "bangle"]),
        reply: ReplyTemplate {
            text: "✨ Elegant diamond bracelets:",
            suggestions: &["View rings", "Check availability", "Shipping info"],
            categories: &[Category::Bracelets],
        },
    },
    Rule {
        name: "pricing",
        trigger: Trigger::Contains(&[
            "price",
            "cost",
            "budget",
            "expensive",
            "cheap",
            "affordable",
        ]),
        reply: text_only(
            "Our diamond jewellery ranges from $3,499 to $8,999. We offer:\n\n💳 Flexible payment plans\n📦 Free shipping on orders over $5,000\n🎁 Complimentary gift wrapping\n✅ Certificate of authenticity\n\nWhat's your budget range?",
            &["Under $5,000", "$5,000 - $7,000", "Over $7,000", "Show all"],
        ),
    },
    Rule {
        name: "sale",
        trigger: Trigger::Contains(&["sale", "discount", "offer", "deal"]),
        reply: text_only(
            "🎉 Great timing! We're currently offering:\n\n• 15% off on all tennis bracelets\n• Free sizing on engagement rings\n• Complimentary cleaning service for 1 year\n• Buy 2 get 10% off additional items\n\nWould you like to see our featured items?",
            &["Show sale items", "Browse all", "Subscribe for offers"],
        ),
    },
    Rule {
        name: "education",
        trigger: Trigger::Contains(&["diamond", "carat", "clarity", "cut", "4c"]),
        reply: text_only(
            "💎 Diamond Education:\n\nThe 4 C's of Diamonds:\n\n✨ Cut - Determines brilliance\n💎 Clarity - Internal purity\n⚖️ Carat - Weight measurement\n🎨 Color - Grade from D to Z\n\nAll our diamonds come with GIA certification. Would you like to learn more about a specific aspect?",
            &["Tell me about cuts", "Certification info", "View diamonds"],
        ),
    },
    Rule {
        name: "shipping",
        trigger: Trigger::Contains(&["ship", "delivery", "tracking"]),
        reply: text_only(
            "📦 Shipping Information:\n\n✅ Free insured shipping on orders over $5,000\n🚚 Express delivery available (2-3 business days)\n🌍 International shipping to 50+ countries\n📍 Real-time tracking\n🔒 Fully insured transit\n\nWhere would you like to ship?",
            &["Domestic shipping", "International", "Express options"],
        ),
    },
    Rule {
        name: "returns",
        trigger: Trigger::Contains(&["return", "warranty", "guarantee", "refund"]),
        reply: text_only(
            "🛡️ Your Peace of Mind:\n\n✅ 30-day hassle-free returns\n💎 Lifetime warranty on craftsmanship\n🔧 Free resizing within 60 days\n✨ Annual professional cleaning\n📜 Certificate of authenticity\n\nWe stand behind every piece!",
            &["Browse products", "Contact support", "Store locations"],
        ),
    },
    Rule {
        name: "customization",
        trigger: Trigger::Contains(&["custom", "personalize", "engrave", "design"]),
        reply: text_only(
            "✨ Custom Design Services:\n\n💍 Create your own unique piece\n✍️ Free engraving on all rings\n🎨 Work with our expert designers\n💎 Choose your own diamonds\n⏱️ 3-4 weeks production time\n\nWould you like to start a custom design consultation?",
            &["Yes, start consultation", "Show ready pieces", "Design examples"],
        ),
    },
    Rule {
        name: "gift",
        trigger: Trigger::Contains(&["gift", "present", "birthday", "anniversary"]),
        reply: text_only(
            "🎁 Perfect Gift Ideas:\n\nOur most popular gifts:\n💝 Diamond studs - Classic & timeless\n💖 Pendant necklaces - Elegant daily wear\n✨ Tennis bracelets - Sophisticated charm\n\n🎀 All items include luxury gift packaging!\n\nWho's the lucky recipient?",
            &["For her", "For mom", "For wife", "Anniversary gift"],
        ),
    },
    Rule {
        name: "contact",
        trigger: Trigger::Contains(&["contact", "call", "email", "support", "help"]),
        reply: text_only(
            "📞 Contact Us:\n\n📧 Email: support@luxediamonds.com\n☎️ Phone: 1-800-DIAMONDS\n💬 Live Chat: Available 24/7\n📍 Visit our showrooms in NYC, LA, Miami\n\n🕐 Customer service hours: Mon-Sat 9AM-8PM EST\n\nHow else can I help you today?",
            &["Book appointment", "Store locations", "Browse products"],
        ),
    },
    Rule {
        name: "thanks",
        trigger: Trigger::Contains(&["thank"]),
        reply: text_only(
            "You're very welcome! 😊 Is there anything else I can help you with today?",
            &["Browse more", "Check on order", "Ask a question"],
        ),
    },
    Rule {
        name: "farewell",
        trigger: Trigger::StartsWith(&["bye", "goodbye", "see you", "thanks bye"]),
        reply: text_only(
            "Thank you for visiting Luxe Diamonds! ✨ We look forward to helping you find the perfect piece. Have a wonderful day! 💎",
            &["Browse more", "Contact us", "Visit again"],
        ),
    },
];

/// Подбор ответа по тексту пользователя. Без состояния: одинаковый ввод даёт одинаковый ответ
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector {
    catalog: Catalog,
    rules: &'static [Rule],
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl ResponseSelector {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rules(catalog, LUXE_RULES)
    }

    pub fn with_rules(catalog: Catalog, rules: &'static [Rule]) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Первое правило, чьё условие выполнено
    pub fn matching_rule(&self, user_input: &str) -> Option<&'static Rule> {
        let normalized = user_input.to_lowercase();
        self.rules.iter().find(|rule| rule.trigger.matches(&normalized))
    }

    pub fn select(&self, user_input: &str) -> Reply {
        match self.matching_rule(user_input) {
            Some(rule) => {
                log::debug!("🔎 Сработало правило '{}'", rule.name);
                rule.reply.render(&self.catalog, Some(rule.name))
            }
            None => {
                log::debug!("🔎 Ни одно правило не подошло, отвечаем по умолчанию");
                self.fallback()
            }
        }
    }

    pub fn welcome(&self) -> Reply {
        WELCOME.render(&self.catalog, None)
    }

    pub fn fallback(&self) -> Reply {
        FALLBACK.render(&self.catalog, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> ResponseSelector {
        ResponseSelector::default()
    }

    fn product_ids(reply: &Reply) -> Vec<&'static str> {
        reply.products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn engagement_rings_scenario() {
        let reply = selector().select("Show me engagement rings");

        assert_eq!(reply.rule, Some("engagement"));
        assert!(reply.text.starts_with("💍 Congratulations on your upcoming engagement!"));
        assert_eq!(product_ids(&reply), vec!["1", "2", "5", "7"]);
        assert_eq!(
            reply.suggestions,
            vec!["Tell me more", "Show other categories", "Price range options"]
        );
    }

    #[test]
    fn engagement_and_proposal_beat_generic_ring_rule() {
        let s = selector();
        let rings = s.catalog().by_category(Category::Rings);

        for input in ["engagement ring please", "planning a PROPOSAL with a ring", "proposal"] {
            let reply = s.select(input);
            assert_eq!(reply.rule, Some("engagement"), "input: {input}");
            assert_eq!(reply.products, rings, "input: {input}");
        }
    }

    #[test]
    fn greetings_offer_suggestions_without_products() {
        let s = selector();
        for input in ["hi", "Hello there", "HEY!", "Good morning", "good evening, anyone?"] {
            let reply = s.select(input);
            assert_eq!(reply.rule, Some("greeting"), "input: {input}");
            assert!(!reply.has_products(), "input: {input}");
            assert!(!reply.suggestions.is_empty(), "input: {input}");
        }
    }

    #[test]
    fn greeting_must_open_the_message() {
        // "hi" в середине фразы приветствием не считается
        let reply = selector().select("oh hi");
        assert_eq!(reply.rule, None);
    }

    #[test]
    fn unmatched_input_gets_specialties_menu() {
        let s = selector();
        for input in ["", "   ", "xyzzy", "what time is it"] {
            assert_eq!(s.select(input), s.fallback(), "input: {input:?}");
        }
        assert!(s.fallback().text.contains("Our specialties include"));
    }

    #[test]
    fn thank_you_gets_acknowledgement() {
        let reply = selector().select("thank you so much");
        assert_eq!(reply.rule, Some("thanks"));
        assert!(reply.text.starts_with("You're very welcome!"));
        assert!(!reply.has_products());
    }

    #[test]
    fn thanks_bye_is_caught_by_thanks_rule() {
        assert_eq!(selector().select("thanks bye").rule, Some("thanks"));
        assert_eq!(selector().select("Bye for now").rule, Some("farewell"));
        assert_eq!(selector().select("see you later").rule, Some("farewell"));
    }

    #[test]
    fn overlapping_keywords_resolve_by_table_order() {
        let s = selector();
        // "earrings" содержит "ring"
        assert_eq!(s.select("View earrings").rule, Some("rings"));
        assert_eq!(s.select("a ring or a necklace?").rule, Some("rings"));
        assert_eq!(s.select("diamond studs").rule, Some("earrings"));
        assert_eq!(s.select("price of a bracelet").rule, Some("bracelets"));
        assert_eq!(s.select("is shipping cheap").rule, Some("pricing"));
    }

    #[test]
    fn category_rules_attach_their_products() {
        let s = selector();
        let necklaces = s.select("Browse necklaces");
        assert_eq!(product_ids(&necklaces), vec!["3", "8"]);

        let bracelets = s.select("any bangles?");
        assert_eq!(product_ids(&bracelets), vec!["6"]);
    }

    #[test]
    fn matching_ignores_case() {
        let s = selector();
        assert_eq!(s.select("SHOW ME RINGS"), s.select("show me rings"));
    }

    #[test]
    fn text_only_rules_return_no_products() {
        let s = selector();
        let inputs = [
            "what's on sale?",
            "tell me about clarity",
            "delivery time",
            "refund policy",
            "can you engrave it",
            "birthday idea",
            "need help",
        ];
        for input in inputs {
            let reply = s.select(input);
            assert!(reply.rule.is_some(), "input: {input}");
            assert!(!reply.has_products(), "input: {input}");
        }
    }

    #[test]
    fn replies_only_reference_catalog_products() {
        let s = selector();
        for rule in s.rules() {
            let reply = rule.reply.render(s.catalog(), Some(rule.name));
            for product in &reply.products {
                assert!(s.catalog().contains(product), "правило {}", rule.name);
            }
        }
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = LUXE_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LUXE_RULES.len());
    }

    #[test]
    fn welcome_lists_starter_suggestions() {
        let reply = selector().welcome();
        assert!(reply.text.starts_with("✨ Welcome to Luxe Diamonds!"));
        assert_eq!(reply.suggestions.len(), 5);
        assert_eq!(reply.suggestions[1], "Browse necklaces");
    }

    #[test]
    fn suggestion_label_behaves_like_typed_text() {
        let s = selector();
        let welcome = s.welcome();
        let label = &welcome.suggestions[1];
        assert_eq!(s.select(label), s.select("Browse necklaces"));
    }
}
