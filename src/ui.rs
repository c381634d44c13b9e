use crate::app::Action;
use crate::charts::{ChartInstance, DOUGHNUT_CANVAS, WEEKLY_CANVAS};
use crate::controls::ClickTarget;
use crate::monthly::CalendarGrid;
use crate::mood::Mood;
use crate::page::{Page, Section};
use crate::session::MenuItem;
use crate::weekly::WeeklySummary;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::time::Instant;

pub const EMOJI_CHOICES: [&str; 8] = ["💼", "🏃", "🍕", "🎮", "📚", "🎵", "🌧", "❤️"];
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn action_attrs(action: &Action) -> String {
    let (name, value) = action.data_attrs();
    match value {
        Some((attr, value)) => format!(r#"data-action="{name}" {attr}="{}""#, escape(&value)),
        None => format!(r#"data-action="{name}""#),
    }
}

pub fn render_menu(items: &[MenuItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="menu-item" {}>{}</div>"#,
                action_attrs(&item.action),
                escape(item.label)
            )
        })
        .collect()
}

pub fn render_badges(summary: &WeeklySummary) -> String {
    summary
        .badges()
        .iter()
        .map(|badge| {
            format!(
                r#"<span class="badge" style="border-color: {color}">{emoji} {label} <b>{count}</b></span>"#,
                color = badge.mood.color(),
                emoji = badge.mood.emoji(),
                label = badge.mood.label(),
                count = badge.count,
            )
        })
        .collect()
}

pub fn render_calendar(grid: &CalendarGrid) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        r#"<div class="calendar-header"><button type="button" id="prevMonth" {prev}>&lsaquo;</button><h3>{title}</h3><button type="button" id="nextMonth" {next}>&rsaquo;</button></div>"#,
        prev = month_nav_attrs(grid.previous()),
        next = month_nav_attrs(grid.next()),
        title = escape(&grid.title),
    ));
    html.push_str(r#"<div class="calendar-grid">"#);
    for weekday in WEEKDAYS {
        html.push_str(&format!(r#"<div class="weekday">{weekday}</div>"#));
    }
    for _ in 0..grid.leading_blanks {
        html.push_str(r#"<div class="day blank"></div>"#);
    }
    for cell in &grid.cells {
        let title = cell
            .average
            .map(|average| format!(r#" title="average {average}""#))
            .unwrap_or_default();
        html.push_str(&format!(
            r#"<div class="day" style="background: {}"{title}>{}</div>"#,
            cell.color, cell.day
        ));
    }
    html.push_str("</div>");
    html
}

fn month_nav_attrs(month: Option<NaiveDate>) -> String {
    match month {
        Some(month) => action_attrs(&Action::ShowMonth(month)),
        None => "disabled".to_string(),
    }
}

fn render_mood_radios(selected: Option<Mood>) -> String {
    Mood::ALL
        .iter()
        .map(|mood| {
            let checked = if selected == Some(*mood) { " checked" } else { "" };
            format!(
                r#"<label class="mood-option"><input type="radio" name="mood" value="{label}" {attrs}{checked} /> {emoji} {label}</label>"#,
                label = mood.label(),
                emoji = mood.emoji(),
                attrs = action_attrs(&Action::SelectMood(*mood)),
            )
        })
        .collect()
}

fn render_emoji_choices() -> String {
    EMOJI_CHOICES
        .iter()
        .map(|glyph| {
            format!(
                r#"<button type="button" class="emoji-choice" {}>{glyph}</button>"#,
                action_attrs(&Action::PickEmoji((*glyph).to_string()))
            )
        })
        .collect()
}

fn charts_json(charts: &[&ChartInstance]) -> String {
    let by_canvas: BTreeMap<&str, _> = charts
        .iter()
        .map(|chart| (chart.canvas.as_str(), &chart.config))
        .collect();
    serde_json::to_string(&by_canvas)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/")
}

fn hidden(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

pub fn render_dashboard(page: &Page) -> String {
    let total = page
        .weekly
        .as_ref()
        .map(WeeklySummary::total_label)
        .unwrap_or_default();
    let badges = page.weekly.as_ref().map(render_badges).unwrap_or_default();
    let calendar = page.calendar.as_ref().map(render_calendar).unwrap_or_default();
    let toast = page
        .toasts
        .visible()
        .map(|toast| {
            let remaining = toast.expires_at.saturating_duration_since(Instant::now());
            format!(
                r#"<div id="toast" class="toast {}" data-dismiss-ms="{}">{}</div>"#,
                toast.kind.class(),
                remaining.as_millis(),
                escape(&toast.message)
            )
        })
        .unwrap_or_default();
    let validation = page
        .form
        .validation
        .as_deref()
        .map(|message| format!(r#"<p class="validation">{}</p>"#, escape(message)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{USERNAME}}", &escape(&page.username))
        .replace("{{MENU_TRIGGER}}", &action_attrs(&Action::Click(ClickTarget::Trigger)))
        .replace("{{MENU}}", &render_menu(&page.menu))
        .replace("{{DROPDOWN_HIDDEN}}", hidden(page.controls.dropdown_open))
        .replace("{{HOME_HIDDEN}}", hidden(page.section == Section::Home))
        .replace("{{DASHBOARD_HIDDEN}}", hidden(page.section == Section::Dashboard))
        .replace("{{OPEN_POPUP}}", &action_attrs(&Action::OpenPopup))
        .replace("{{CLOSE_POPUP}}", &action_attrs(&Action::ClosePopup))
        .replace("{{POPUP_HIDDEN}}", hidden(page.controls.popup_visible))
        .replace("{{MOOD_RADIOS}}", &render_mood_radios(page.form.mood))
        .replace("{{TAG}}", &escape(&page.form.tag))
        .replace("{{TAG_EMOJI}}", &escape(&page.form.tag_emoji))
        .replace("{{TOGGLE_EMOJI}}", &action_attrs(&Action::ToggleEmojiPicker))
        .replace("{{EMOJI_LABEL}}", &escape(&page.form.emoji_button_label))
        .replace("{{PICKER_HIDDEN}}", hidden(page.controls.emoji_picker_open))
        .replace("{{EMOJI_CHOICES}}", &render_emoji_choices())
        .replace("{{SUBMIT}}", &action_attrs(&Action::Submit))
        .replace("{{SAVE_DISABLED}}", if page.form.save.disabled { " disabled" } else { "" })
        .replace("{{SAVE_LABEL}}", page.form.save.label)
        .replace("{{VALIDATION}}", &validation)
        .replace("{{TOAST}}", &toast)
        .replace("{{LOAD_WEEK}}", &action_attrs(&Action::LoadWeek(String::new())))
        .replace("{{WEEKLY_CANVAS}}", WEEKLY_CANVAS)
        .replace("{{DOUGHNUT_CANVAS}}", DOUGHNUT_CANVAS)
        .replace("{{TOTAL}}", &escape(&total))
        .replace("{{BADGES}}", &badges)
        .replace("{{CALENDAR}}", &calendar)
        .replace("{{CHARTS_JSON}}", &charts_json(&page.charts.instances()))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Dashboard</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .hidden { display: none !important; }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 18px 28px;
    }

    .profile { position: relative; }
    #profileDropdown {
      position: absolute;
      right: 0;
      background: white;
      border-radius: 12px;
      box-shadow: var(--shadow);
      min-width: 140px;
    }
    .menu-item { padding: 10px 16px; cursor: pointer; }

    main { width: min(960px, 100%); margin: 0 auto; display: grid; gap: 24px; padding: 0 18px 48px; }
    .card { background: var(--card); border-radius: 24px; box-shadow: var(--shadow); padding: 24px; }

    #moodPopup {
      position: fixed;
      inset: 0;
      display: grid;
      place-items: center;
      background: rgba(0, 0, 0, 0.35);
    }

    .badge {
      display: inline-flex;
      gap: 6px;
      border: 2px solid;
      border-radius: 999px;
      padding: 4px 10px;
      margin: 4px;
    }

    .calendar-header { display: flex; justify-content: space-between; align-items: center; }
    .calendar-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 6px; }
    .weekday { text-align: center; font-size: 0.8rem; color: #8b857d; }
    .day { border-radius: 10px; padding: 10px 0; text-align: center; }
    .day.blank { background: transparent; }

    .toast {
      position: fixed;
      bottom: 24px;
      right: 24px;
      padding: 12px 18px;
      border-radius: 12px;
      color: white;
    }
    .toast-success { background: #2e8b57; }
    .toast-error { background: #c0392b; }
    .validation { color: #c0392b; }
  </style>
</head>
<body>
  <header>
    <h1>Mood Tracker</h1>
    <div class="profile">
      <span id="usernameDisplay">{{USERNAME}}</span>
      <button type="button" id="profileMenuBtn" {{MENU_TRIGGER}}>&#9776;</button>
      <div id="profileDropdown" class="{{DROPDOWN_HIDDEN}}">{{MENU}}</div>
    </div>
  </header>

  <main>
    <section id="homeSection" class="card{{HOME_HIDDEN}}">
      <p>How are you feeling today?</p>
      <button type="button" id="logMoodBtn" {{OPEN_POPUP}}>Log mood</button>
    </section>

    <section id="dashboardSection" class="{{DASHBOARD_HIDDEN}}">
      <div class="card" id="weeklyContainer">
        <div class="week-picker">
          <input type="date" id="weekDate" />
          <button type="button" id="loadWeekBtn" {{LOAD_WEEK}}>Load</button>
        </div>
        <canvas id="{{WEEKLY_CANVAS}}"></canvas>
        <div class="doughnut">
          <canvas id="{{DOUGHNUT_CANVAS}}"></canvas>
          <span id="moodTotal">{{TOTAL}}</span>
        </div>
        <div id="moodBadges">{{BADGES}}</div>
      </div>
      <div class="card" id="monthlyContainer">
        <div id="calendarContainer">{{CALENDAR}}</div>
      </div>
    </section>
  </main>

  <div id="moodPopup" class="{{POPUP_HIDDEN}}">
    <form id="moodForm" class="card">
      <button type="button" id="closePopupBtn" {{CLOSE_POPUP}}>&times;</button>
      <div class="moods">{{MOOD_RADIOS}}</div>
      <input type="text" id="tagInput" name="tag" placeholder="Tag (optional)" value="{{TAG}}" />
      <input type="hidden" id="tagEmoji" name="tag_emoji" value="{{TAG_EMOJI}}" />
      <button type="button" id="emojiPickerBtn" {{TOGGLE_EMOJI}}>{{EMOJI_LABEL}}</button>
      <div id="emojiPicker" class="{{PICKER_HIDDEN}}">{{EMOJI_CHOICES}}</div>
      {{VALIDATION}}
      <button type="submit" id="saveMoodBtn" {{SUBMIT}}{{SAVE_DISABLED}}>{{SAVE_LABEL}}</button>
    </form>
  </div>

  {{TOAST}}

  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <script>
    const toast = document.getElementById('toast');
    if (toast) {
      setTimeout(() => toast.remove(), Number(toast.dataset.dismissMs) || 0);
    }

    const charts = {{CHARTS_JSON}};

    const dayDividers = {
      id: 'dayDividers',
      afterDraw(chart, _args, opts) {
        const indices = (opts && opts.indices) || [];
        const { ctx, chartArea, scales } = chart;
        ctx.save();
        ctx.setLineDash([4, 4]);
        ctx.strokeStyle = 'rgba(0, 0, 0, 0.25)';
        for (const index of indices) {
          const x = (scales.x.getPixelForValue(index - 1) + scales.x.getPixelForValue(index)) / 2;
          ctx.beginPath();
          ctx.moveTo(x, chartArea.top);
          ctx.lineTo(x, chartArea.bottom);
          ctx.stroke();
        }
        ctx.restore();
      }
    };

    for (const [canvas, config] of Object.entries(charts)) {
      const el = document.getElementById(canvas);
      if (!el) continue;
      const y = config.options.scales && config.options.scales.y;
      if (y && y.ticks && y.ticks.emoji) {
        const emoji = y.ticks.emoji;
        y.ticks.callback = (value) => emoji[value] ?? '';
      }
      for (const dataset of config.data.datasets) {
        if (dataset.segmentColors) {
          const colors = dataset.segmentColors;
          dataset.segment = { borderColor: (ctx) => colors[ctx.p0DataIndex] };
        }
      }
      config.plugins = config.type === 'line' ? [dayDividers] : [];
      new Chart(el, config);
    }
  </script>
</body>
</html>
"#;
