//! Built-in use cases

use super::{Field, UseCase};

pub(super) static USE_CASES: &[UseCase] = &[
    UseCase {
        id: "real-time-analysis",
        title: "Real-Time Page Analysis",
        description: "Get instant AI coaching on any webpage you're viewing",
        icon: "🔍",
        fields: &[
            Field::select(
                "pageType",
                "Page Type",
                &[
                    "MLS Listing",
                    "Agent Website",
                    "Email Draft",
                    "Social Media Post",
                    "Contract/Document",
                ],
            )
            .required(),
            Field::textarea("analysisGoal", "What do you want to analyze?")
                .placeholder("e.g., Check for red flags, pricing concerns, marketing effectiveness")
                .required(),
            Field::textarea("context", "Additional Context").placeholder(
                "e.g., Showing this to a luxury buyer, first-time buyer with $500K budget",
            ),
        ],
        template: r#"Analyze this {{pageType}} for {{analysisGoal}}.

{{#if context}}
Context: {{context}}
{{/if}}

Please provide:
- Key observations
- Potential concerns or red flags
- Specific recommendations
- Questions I should ask based on this information"#,
    },
    UseCase {
        id: "lead-followup",
        title: "Lead Follow-Up Automation",
        description: "Generate personalized follow-up sequences that convert",
        icon: "📧",
        fields: &[
            Field::select(
                "leadType",
                "Lead Type",
                &[
                    "Website Inquiry",
                    "Open House Visitor",
                    "Buyer Consultation",
                    "Seller Lead",
                    "Past Client",
                    "Referral",
                ],
            )
            .required(),
            Field::textarea("leadSituation", "Lead Situation")
                .placeholder(
                    "e.g., Visited open house yesterday, loved the property but needs to think about it",
                )
                .required(),
            Field::text("pricePoint", "Price Point").placeholder("e.g., $450K"),
            Field::text("location", "Market/Location")
                .placeholder("e.g., South Florida, Miami Beach"),
            Field::select(
                "tone",
                "Desired Tone",
                &[
                    "Helpful & Consultative",
                    "Professional & Direct",
                    "Warm & Friendly",
                    "Urgent & Action-Oriented",
                ],
            )
            .required(),
            Field::number("touchpoints", "Number of Touchpoints")
                .placeholder("5")
                .required(),
            Field::text("timeframe", "Timeframe")
                .placeholder("e.g., 2 weeks, 30 days")
                .required(),
        ],
        template: r#"I need a follow-up email sequence for a {{leadType}} who {{leadSituation}}.

{{#if pricePoint}}Price Point: {{pricePoint}}{{/if}}
{{#if location}}Market: {{location}}{{/if}}

Tone should be {{tone}}. Include {{touchpoints}} touchpoints over {{timeframe}}.

For each touchpoint, provide:
- Email subject line
- Email body
- Key value proposition
- Call-to-action
- Optimal send time

Make each touchpoint build on the previous one while adding new value."#,
    },
    UseCase {
        id: "expired-fsbo",
        title: "Expired/FSBO Conversion",
        description: "Turn expired listings and FSBOs into signed clients",
        icon: "🎯",
        fields: &[
            Field::select(
                "listingType",
                "Listing Type",
                &[
                    "Expired Listing",
                    "For Sale By Owner (FSBO)",
                    "Withdrawn Listing",
                ],
            )
            .required(),
            Field::text("address", "Property Address")
                .placeholder("e.g., 123 Main St, Miami Beach, FL")
                .required(),
            Field::text("listPrice", "Original List Price").placeholder("e.g., $750,000"),
            Field::text("daysOnMarket", "Days on Market").placeholder("e.g., 180 days"),
            Field::textarea("propertyDetails", "Property Details")
                .placeholder("e.g., 4 bed / 3 bath, 2,500 sqft, renovated kitchen"),
            Field::textarea("whyExpired", "Why It Likely Expired/Issues")
                .placeholder("e.g., Overpriced, poor photos, limited marketing"),
        ],
        template: r#"Write a personalized outreach letter/email to the owner of {{address}}, a {{listingType}}.

{{#if listPrice}}Original List Price: {{listPrice}}{{/if}}
{{#if daysOnMarket}}Days on Market: {{daysOnMarket}}{{/if}}
{{#if propertyDetails}}Property: {{propertyDetails}}{{/if}}
{{#if whyExpired}}Likely Issues: {{whyExpired}}{{/if}}

Position myself as the solution without criticizing their previous agent or FSBO approach.

Include:
- Empathetic opening acknowledging their situation
- 2-3 specific data-driven insights about their property/market
- My differentiated approach
- Social proof from similar properties I've sold
- Low-pressure call-to-action (free consultation/market analysis)

Tone: Empathetic, consultative, confident but not arrogant."#,
    },
    UseCase {
        id: "competitive-analysis",
        title: "Competitive Listing Analysis",
        description: "Win listing presentations with data-driven insights",
        icon: "📊",
        fields: &[
            Field::text("subjectProperty", "Subject Property Address")
                .placeholder("e.g., 456 Ocean Dr, Miami Beach")
                .required(),
            Field::textarea("propertyType", "Property Type & Details")
                .placeholder("e.g., 3 bed / 2 bath, 1,800 sqft, waterfront")
                .required(),
            Field::text("sellerExpectation", "Seller Price Expectation")
                .placeholder("e.g., $950,000"),
            Field::text("compRange", "Comparable Listings Range")
                .placeholder("e.g., $850K - $1.1M"),
            Field::select(
                "marketCondition",
                "Current Market Condition",
                &[
                    "Hot Seller's Market",
                    "Balanced Market",
                    "Buyer's Market",
                    "Uncertain/Transitioning",
                ],
            ),
            Field::textarea("uniqueFeatures", "Unique Features/Challenges").placeholder(
                "e.g., Recently renovated, needs work, great location but busy street",
            ),
        ],
        template: r#"I'm preparing a listing presentation for {{subjectProperty}}.

Property Details: {{propertyType}}
{{#if sellerExpectation}}Seller Expects: {{sellerExpectation}}{{/if}}
{{#if compRange}}Comp Range: {{compRange}}{{/if}}
{{#if marketCondition}}Market: {{marketCondition}}{{/if}}
{{#if uniqueFeatures}}Special Considerations: {{uniqueFeatures}}{{/if}}

Create a comprehensive competitive positioning analysis including:

1. **Pricing Strategy**
   - Recommended list price with data justification
   - Strategic pricing tiers (aggressive/moderate/conservative)
   - Expected days on market for each tier
   - Price adjustment strategy if needed

2. **Market Position**
   - How this compares to active competition
   - Key competitive advantages
   - Potential challenges and solutions

3. **Marketing Plan**
   - Differentiation strategy
   - Target buyer profile
   - Unique marketing tactics
   - Timeline and milestones

4. **Presentation Script**
   - Opening hook
   - Data presentation flow
   - Objection handling
   - Closing technique

Format as a professional presentation I can deliver to the seller."#,
    },
    UseCase {
        id: "objection-handling",
        title: "Objection Response Library",
        description: "Save deals with instant expert objection responses",
        icon: "💬",
        fields: &[
            Field::textarea("objection", "Specific Objection")
                .placeholder(
                    r#"e.g., "The price is too high" or "We need to think about it""#,
                )
                .required(),
            Field::select(
                "clientType",
                "Client Type",
                &[
                    "Buyer",
                    "Seller",
                    "Buyer (first-time)",
                    "Seller (expired listing)",
                    "Investor",
                ],
            )
            .required(),
            Field::text("propertyPrice", "Property Price").placeholder("e.g., $650,000"),
            Field::text("market", "Market/Location").placeholder("e.g., South Florida, Miami"),
            Field::textarea("context", "Situation Context").placeholder(
                "e.g., They love the property but think comparable homes sold for less. Actually, recent comps support current price.",
            ),
            Field::textarea("urgency", "Urgency Factors").placeholder(
                "e.g., Multiple offers expected, rates changing, seasonal market shift",
            ),
        ],
        template: r#"Create a professional response to this objection: "{{objection}}"

Client Type: {{clientType}}
{{#if propertyPrice}}Property Price: {{propertyPrice}}{{/if}}
{{#if market}}Market: {{market}}{{/if}}
{{#if context}}Situation: {{context}}{{/if}}
{{#if urgency}}Urgency Factors: {{urgency}}{{/if}}

Structure the response using this framework:

1. **Empathy Statement** - Acknowledge their concern genuinely
2. **Reframe** - Change perspective on the issue
3. **Data/Evidence** - Facts that address the concern
4. **Alternative Solution** - If applicable, offer a path forward
5. **Trial Close** - Question or statement to move conversation forward

Tone: Understanding but confident, consultative not defensive.

Provide both:
- Full response script
- Key talking points I can reference quickly"#,
    },
    UseCase {
        id: "custom-prompt",
        title: "Custom Prompt Generator",
        description: "Build your own AI prompt for any real estate situation",
        icon: "✨",
        fields: &[
            Field::textarea("situation", "Describe Your Situation")
                .placeholder("What do you need help with?")
                .required(),
            Field::textarea("goal", "Desired Outcome")
                .placeholder("What result are you trying to achieve?")
                .required(),
            Field::textarea("details", "Relevant Details")
                .placeholder("Property details, client info, market conditions, etc."),
            Field::select(
                "format",
                "Preferred Format",
                &[
                    "Email",
                    "Script",
                    "Bullet Points",
                    "Long-form Letter",
                    "Social Post",
                    "Presentation",
                ],
            ),
            Field::select(
                "tone",
                "Tone",
                &[
                    "Professional",
                    "Friendly",
                    "Urgent",
                    "Consultative",
                    "Educational",
                    "Persuasive",
                ],
            ),
        ],
        template: r#"I need help with: {{situation}}

Goal: {{goal}}

{{#if details}}
Relevant Details: {{details}}
{{/if}}

{{#if format}}Format this as: {{format}}{{/if}}
{{#if tone}}Tone: {{tone}}{{/if}}

Please provide a detailed, actionable response that I can use immediately in my real estate business."#,
    },
];
