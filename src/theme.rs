//! Theme configuration for the coinlens terminal interface
//!
//! Provides a dark palette with semantic colors for financial data:
//! positive/negative changes, risk levels, and review states.

use ratatui::style::{Color, Modifier, Style};

use crate::api::{ApprovalStatus, RiskLevel, Sentiment};

/// Theme colors for the application
#[derive(Clone)]
pub struct Theme {
    // Chrome
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,

    // Semantic colors
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub pending: Color,
}

impl Theme {
    /// Dark theme tuned for financial data in a terminal
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Cyan,
            positive: Color::Green,
            negative: Color::Red,
            warning: Color::Yellow,
            pending: Color::Blue,
        }
    }

    /// Style for a signed change value: green at or above zero, red below
    pub fn change_style(&self, value: f64) -> Style {
        if value >= 0.0 {
            Style::default().fg(self.positive)
        } else {
            Style::default().fg(self.negative)
        }
    }

    pub fn sentiment_style(&self, sentiment: Sentiment) -> Style {
        match sentiment {
            Sentiment::Positive => Style::default().fg(self.positive),
            Sentiment::Negative => Style::default().fg(self.negative),
            Sentiment::Neutral => Style::default().fg(self.text_muted),
        }
    }

    pub fn risk_style(&self, risk: RiskLevel) -> Style {
        match risk {
            RiskLevel::Low => Style::default().fg(self.positive),
            RiskLevel::Medium => Style::default().fg(self.warning),
            RiskLevel::High => Style::default().fg(self.negative),
        }
    }

    pub fn status_style(&self, status: ApprovalStatus) -> Style {
        match status {
            ApprovalStatus::Pending => Style::default().fg(self.pending),
            ApprovalStatus::Approved => Style::default().fg(self.positive),
            ApprovalStatus::Rejected => Style::default().fg(self.negative),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
