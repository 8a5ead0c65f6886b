//! Calculator page handlers.
//!
//! The page owns everything the quote engine does not: parsing the raw
//! count field, formatting KRW for display, and the idle/computed page
//! state. The engine only ever sees validated enums and an integer.

use askama::Template;
use axum::{extract::State, response::Html, Form};
use chrono::{Datelike, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::pricing::models::DeviceCounts;
use crate::pricing::requests::QuoteForm;
use crate::pricing::{
    calculators, quote, tariff_catalog, tariffs, Breakdown, Carrier, InternetTier, QuoteInput,
    QuoteState, SettopType,
};
use crate::AppState;

/// Format a KRW amount with thousands separators and the 원 suffix.
fn format_krw(amount: Decimal) -> String {
    let whole = amount.trunc().to_i64().unwrap_or(0);
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    format!("{}원", grouped)
}

/// Carrier select button
struct CarrierOption {
    value: &'static str,
    selected: bool,
}

/// Per-carrier rate shown under a tier radio; only the selected carrier's
/// span is visible
struct CarrierRate {
    carrier: &'static str,
    rate_display: String,
    active: bool,
}

/// Internet tier radio
struct TierOption {
    value: &'static str,
    checked: bool,
    rates: Vec<CarrierRate>,
}

/// Settop radio inside a carrier's group
struct SettopOption {
    value: &'static str,
    rate_display: String,
    checked: bool,
    has_waiver_note: bool,
}

/// Settop radios are grouped per carrier since the offered classes differ
struct SettopGroup {
    carrier: &'static str,
    active: bool,
    options: Vec<SettopOption>,
}

/// Computed breakdown ready for display
struct BreakdownView {
    line_count: i32,
    line_detail: String,
    line_price_display: String,
    channel_detail: String,
    channel_fee_display: String,
    settop_detail: String,
    settop_fee_display: String,
    has_install: bool,
    install_fee_display: String,
    subtotal_display: String,
    total_display: String,
    per_tv_subtotal_display: String,
    per_tv_total_display: String,
}

/// Calculator page template
#[derive(Template)]
#[template(path = "calculator/page.html")]
struct CalculatorTemplate {
    site_name: String,
    seo_title: String,
    seo_description: String,
    contact_name: String,
    contact_phone: String,
    blog_url: String,
    contact_qr: String,
    year: i32,
    tv_count_value: String,
    carriers: Vec<CarrierOption>,
    tiers: Vec<TierOption>,
    settop_groups: Vec<SettopGroup>,
    result: Option<BreakdownView>,
}

/// Current form selections, echoed back after a calculation
struct FormSelection {
    tv_count: String,
    carrier: Carrier,
    internet_tier: InternetTier,
    settop_type: SettopType,
}

impl Default for FormSelection {
    fn default() -> Self {
        Self {
            tv_count: String::new(),
            carrier: Carrier::LguPlus,
            internet_tier: InternetTier::Mb500,
            settop_type: SettopType::Uhd,
        }
    }
}

/// Calculator page, idle until the user triggers a calculation
pub async fn page(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state, &FormSelection::default(), &QuoteState::Idle)
}

/// Explicit calculate trigger. Recomputes the whole breakdown from the
/// submitted snapshot; nothing is carried over from earlier calculations.
pub async fn calculate(
    State(state): State<AppState>,
    Form(form): Form<QuoteForm>,
) -> Result<Html<String>> {
    let input = form.to_input();
    let breakdown = quote(&input)?;
    let quote_state = QuoteState::triggered(input, breakdown);

    let selection = FormSelection {
        tv_count: form.tv_count.trim().to_string(),
        carrier: form.carrier,
        internet_tier: form.internet_tier,
        settop_type: form.settop_type,
    };
    render(&state, &selection, &quote_state)
}

fn render(state: &AppState, sel: &FormSelection, quote_state: &QuoteState) -> Result<Html<String>> {
    let catalog = tariff_catalog();

    let carriers = Carrier::ALL
        .iter()
        .map(|&carrier| CarrierOption {
            value: carrier.label(),
            selected: carrier == sel.carrier,
        })
        .collect();

    let tiers = InternetTier::ALL
        .iter()
        .map(|&tier| TierOption {
            value: tier.label(),
            checked: tier == sel.internet_tier,
            rates: catalog
                .iter()
                .filter_map(|c| {
                    c.internet
                        .iter()
                        .find(|(t, _)| *t == tier)
                        .map(|&(_, rate)| CarrierRate {
                            carrier: c.carrier.label(),
                            rate_display: format_krw(rate),
                            active: c.carrier == sel.carrier,
                        })
                })
                .collect(),
        })
        .collect();

    let settop_groups = catalog
        .iter()
        .map(|c| SettopGroup {
            carrier: c.carrier.label(),
            active: c.carrier == sel.carrier,
            options: c
                .settops
                .iter()
                .map(|&(settop, rate)| SettopOption {
                    value: settop.label(),
                    rate_display: format_krw(rate),
                    // only the selected carrier's group takes the checked
                    // state, the others keep their first option marked
                    checked: if c.carrier == sel.carrier {
                        settop == sel.settop_type
                    } else {
                        Some(&settop) == c.settops.first().map(|(s, _)| s)
                    },
                    has_waiver_note: c.carrier == Carrier::LguPlus && settop == SettopType::Uhd,
                })
                .collect(),
        })
        .collect();

    let result = match quote_state {
        QuoteState::Idle => None,
        QuoteState::Computed { input, breakdown } => Some(breakdown_view(input, breakdown)),
    };

    let template = CalculatorTemplate {
        site_name: state.site.site_name.clone(),
        seo_title: format!("{} 고객 전용 계산기", state.site.site_name),
        seo_description: "필요하신 TV 수량과 옵션을 선택하여 월 요금을 계산해보세요".to_string(),
        contact_name: state.site.contact_name.clone(),
        contact_phone: state.site.contact_phone.clone(),
        blog_url: state.site.blog_url.clone(),
        contact_qr: state.contact_qr.clone(),
        year: Utc::now().year(),
        tv_count_value: sel.tv_count.clone(),
        carriers,
        tiers,
        settop_groups,
        result,
    };

    Ok(Html(template.render()?))
}

fn breakdown_view(input: &QuoteInput, b: &Breakdown) -> BreakdownView {
    let counts = calculators::device_counts(input.tv_count);
    let line_rate =
        tariffs::internet_rate(input.carrier, input.internet_tier).unwrap_or(Decimal::ZERO);

    BreakdownView {
        line_count: b.line_count,
        line_detail: format!("{}회선 × {}", b.line_count, format_krw(line_rate)),
        line_price_display: format_krw(b.line_price),
        channel_detail: channel_detail(input.carrier, &counts),
        channel_fee_display: format_krw(b.channel_fee),
        settop_detail: settop_detail(input, b),
        settop_fee_display: format_krw(b.settop_fee),
        has_install: !b.install_fee.is_zero(),
        install_fee_display: format_krw(b.install_fee),
        subtotal_display: format_krw(b.subtotal),
        total_display: format_krw(b.total_with_tax),
        per_tv_subtotal_display: format_krw(calculators::per_tv(b.subtotal, input.tv_count)),
        per_tv_total_display: format_krw(calculators::per_tv(b.total_with_tax, input.tv_count)),
    }
}

fn channel_detail(carrier: Carrier, counts: &DeviceCounts) -> String {
    match carrier {
        Carrier::LguPlus => format!(
            "{}대 × {}",
            counts.tv_count,
            format_krw(tariffs::LGU_CHANNEL_RATE)
        ),
        Carrier::Kt => {
            let mut detail = format!(
                "메인 {}대 × {} + 서브 {}대 × {}",
                counts.main_count,
                format_krw(tariffs::KT_MAIN_DEVICE_RATE),
                counts.sub_count,
                format_krw(tariffs::KT_SUB_DEVICE_RATE),
            );
            if counts.sub_count > tariffs::KT_SUB_BULK_THRESHOLD {
                detail.push_str(&format!(
                    " (서브 {}대 초과 10% 할인)",
                    tariffs::KT_SUB_BULK_THRESHOLD
                ));
            }
            detail
        }
    }
}

fn settop_detail(input: &QuoteInput, b: &Breakdown) -> String {
    match tariffs::settop_rate(input.carrier, input.settop_type) {
        Some(unit) if unit.is_zero() => "무료".to_string(),
        Some(_) if b.settop_fee.is_zero() => {
            format!("{}대 초과 면제", tariffs::LGU_UHD_WAIVER_THRESHOLD)
        }
        Some(unit) => format!("{}대 × {}", input.tv_count, format_krw(unit)),
        None => String::new(),
    }
}
