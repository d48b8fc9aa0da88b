use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{COLUMNS, Category, YES_NO, props};

pub(super) const CATEGORY: Category = Category {
    key: "sections",
    title: "Sections",
    components: &[
        "Hero",
        "Features",
        "Testimonials",
        "Stats",
        "Pricing",
        "Team",
        "FAQ",
        "CTA",
        "Timeline",
    ],
};

pub(super) fn hero() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Hero", "Hero Section")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field("primaryButtonText", FieldSpec::text())
                .field("primaryButtonHref", FieldSpec::text())
                .field("secondaryButtonText", FieldSpec::text())
                .field("secondaryButtonHref", FieldSpec::text())
                .field("backgroundImage", FieldSpec::text())
                .field(
                    "alignment",
                    FieldSpec::radio([("Left", "left"), ("Center", "center")]),
                ),
        )
        .with_defaults(props(json!({
            "title": "Build Amazing Websites",
            "subtitle": "Create stunning pages with our visual editor. No coding required.",
            "primaryButtonText": "Get Started",
            "primaryButtonHref": "#",
            "secondaryButtonText": "Learn More",
            "secondaryButtonHref": "#",
            "backgroundImage": "",
            "alignment": "center",
        })))
}

pub(super) fn features() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Features", "Features")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field("columns", FieldSpec::select(COLUMNS))
                .field(
                    "features",
                    FieldSpec::array(
                        Fields::new()
                            .field("icon", FieldSpec::text())
                            .field("title", FieldSpec::text())
                            .field("description", FieldSpec::textarea()),
                    ),
                ),
        )
        .with_defaults(props(json!({
            "title": "Our Features",
            "subtitle": "Everything you need to build amazing products",
            "columns": "3",
            "features": [
                { "icon": "⚡", "title": "Lightning Fast", "description": "Optimized for speed and performance" },
                { "icon": "🔒", "title": "Secure", "description": "Enterprise-grade security built-in" },
                { "icon": "🎨", "title": "Beautiful Design", "description": "Stunning UI components out of the box" },
                { "icon": "📱", "title": "Responsive", "description": "Works perfectly on all devices" },
                { "icon": "🔧", "title": "Customizable", "description": "Fully customizable to your needs" },
                { "icon": "💬", "title": "24/7 Support", "description": "Round-the-clock customer support" },
            ],
        })))
}

pub(super) fn testimonials() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Testimonials", "Testimonials")
        .with_fields(
            Fields::new().field("title", FieldSpec::text()).field(
                "testimonials",
                FieldSpec::array(
                    Fields::new()
                        .field("quote", FieldSpec::textarea())
                        .field("author", FieldSpec::text())
                        .field("role", FieldSpec::text())
                        .field("company", FieldSpec::text())
                        .field("avatar", FieldSpec::text()),
                ),
            ),
        )
        .with_defaults(props(json!({
            "title": "What Our Customers Say",
            "testimonials": [
                {
                    "quote": "This product has completely transformed our workflow. Highly recommended!",
                    "author": "Sarah Johnson",
                    "role": "CEO",
                    "company": "TechCorp",
                    "avatar": "https://i.pravatar.cc/100?img=1",
                },
                {
                    "quote": "The best investment we've made this year. Our team productivity has doubled.",
                    "author": "Michael Chen",
                    "role": "CTO",
                    "company": "StartupXYZ",
                    "avatar": "https://i.pravatar.cc/100?img=2",
                },
                {
                    "quote": "Incredible support team and amazing product. Five stars!",
                    "author": "Emily Davis",
                    "role": "Product Manager",
                    "company": "InnovateCo",
                    "avatar": "https://i.pravatar.cc/100?img=3",
                },
            ],
        })))
}

pub(super) fn stats() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Stats", "Statistics")
        .with_fields(
            Fields::new().field("title", FieldSpec::text()).field(
                "stats",
                FieldSpec::array(
                    Fields::new()
                        .field("value", FieldSpec::text())
                        .field("label", FieldSpec::text())
                        .field("suffix", FieldSpec::text()),
                ),
            ),
        )
        .with_defaults(props(json!({
            "title": "Our Impact",
            "stats": [
                { "value": "10", "label": "Years Experience", "suffix": "+" },
                { "value": "500", "label": "Happy Clients", "suffix": "+" },
                { "value": "1000", "label": "Projects Completed", "suffix": "+" },
                { "value": "99", "label": "Satisfaction Rate", "suffix": "%" },
            ],
        })))
}

pub(super) fn pricing() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Pricing", "Pricing")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field(
                    "plans",
                    FieldSpec::array(
                        Fields::new()
                            .field("name", FieldSpec::text())
                            .field("price", FieldSpec::text())
                            .field("period", FieldSpec::text())
                            .field("description", FieldSpec::text())
                            .field("features", FieldSpec::textarea())
                            .field("highlighted", FieldSpec::radio(YES_NO))
                            .field("buttonText", FieldSpec::text()),
                    ),
                ),
        )
        .with_defaults(props(json!({
            "title": "Simple Pricing",
            "subtitle": "Choose the plan that fits your needs",
            "plans": [
                {
                    "name": "Starter",
                    "price": "$9",
                    "period": "/month",
                    "description": "Perfect for individuals",
                    "features": "5 projects\n10GB storage\nEmail support\nBasic analytics",
                    "highlighted": "false",
                    "buttonText": "Get Started",
                },
                {
                    "name": "Professional",
                    "price": "$29",
                    "period": "/month",
                    "description": "Best for growing teams",
                    "features": "Unlimited projects\n100GB storage\nPriority support\nAdvanced analytics\nCustom domain",
                    "highlighted": "true",
                    "buttonText": "Get Started",
                },
                {
                    "name": "Enterprise",
                    "price": "$99",
                    "period": "/month",
                    "description": "For large organizations",
                    "features": "Everything in Pro\nUnlimited storage\nDedicated support\nSLA guarantee\nCustom integrations",
                    "highlighted": "false",
                    "buttonText": "Contact Sales",
                },
            ],
        })))
}

pub(super) fn team() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Team", "Team")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field(
                    "members",
                    FieldSpec::array(
                        Fields::new()
                            .field("name", FieldSpec::text())
                            .field("role", FieldSpec::text())
                            .field("bio", FieldSpec::textarea())
                            .field("avatar", FieldSpec::text()),
                    ),
                ),
        )
        .with_defaults(props(json!({
            "title": "Meet Our Team",
            "subtitle": "The people behind our success",
            "members": [
                { "name": "John Smith", "role": "Founder & CEO", "bio": "10+ years of experience in tech leadership", "avatar": "https://i.pravatar.cc/200?img=11" },
                { "name": "Jane Doe", "role": "CTO", "bio": "Expert in scalable architecture", "avatar": "https://i.pravatar.cc/200?img=5" },
                { "name": "Bob Wilson", "role": "Lead Designer", "bio": "Award-winning UX designer", "avatar": "https://i.pravatar.cc/200?img=12" },
                { "name": "Alice Brown", "role": "Head of Marketing", "bio": "Growth specialist with global experience", "avatar": "https://i.pravatar.cc/200?img=9" },
            ],
        })))
}

pub(super) fn faq() -> BlockTypeDefinition {
    BlockTypeDefinition::new("FAQ", "FAQ")
        .with_fields(
            Fields::new().field("title", FieldSpec::text()).field(
                "questions",
                FieldSpec::array(
                    Fields::new()
                        .field("question", FieldSpec::text())
                        .field("answer", FieldSpec::textarea()),
                ),
            ),
        )
        .with_defaults(props(json!({
            "title": "Frequently Asked Questions",
            "questions": [
                {
                    "question": "How do I get started?",
                    "answer": "Simply sign up for an account and follow our quick start guide. You'll be up and running in minutes.",
                },
                {
                    "question": "What payment methods do you accept?",
                    "answer": "We accept all major credit cards, PayPal, and bank transfers for enterprise accounts.",
                },
                {
                    "question": "Can I cancel my subscription?",
                    "answer": "Yes, you can cancel anytime. No questions asked, no hidden fees.",
                },
                {
                    "question": "Do you offer a free trial?",
                    "answer": "Yes! We offer a 14-day free trial with full access to all features.",
                },
                {
                    "question": "Is my data secure?",
                    "answer": "Absolutely. We use industry-standard encryption and comply with GDPR and SOC 2 requirements.",
                },
            ],
        })))
}

pub(super) fn cta() -> BlockTypeDefinition {
    BlockTypeDefinition::new("CTA", "Call to Action")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field("buttonText", FieldSpec::text())
                .field("buttonHref", FieldSpec::text())
                .field(
                    "variant",
                    FieldSpec::select([
                        ("Primary", "primary"),
                        ("Secondary", "secondary"),
                        ("Gradient", "gradient"),
                    ]),
                ),
        )
        .with_defaults(props(json!({
            "title": "Ready to Get Started?",
            "subtitle": "Join thousands of satisfied customers today",
            "buttonText": "Start Free Trial",
            "buttonHref": "#",
            "variant": "primary",
        })))
}

pub(super) fn timeline() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Timeline", "Timeline")
        .with_fields(
            Fields::new().field("title", FieldSpec::text()).field(
                "events",
                FieldSpec::array(
                    Fields::new()
                        .field("date", FieldSpec::text())
                        .field("title", FieldSpec::text())
                        .field("description", FieldSpec::textarea()),
                ),
            ),
        )
        .with_defaults(props(json!({
            "title": "Our Journey",
            "events": [
                { "date": "2020", "title": "Company Founded", "description": "Started with a vision to change the world" },
                { "date": "2021", "title": "First Product Launch", "description": "Released our flagship product" },
                { "date": "2022", "title": "Series A Funding", "description": "Raised $10M to accelerate growth" },
                { "date": "2023", "title": "Global Expansion", "description": "Expanded to 50+ countries" },
                { "date": "2024", "title": "1M Users", "description": "Reached one million active users" },
            ],
        })))
}
