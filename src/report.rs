//! Console report rendering: banner, per-country item table and totals table

use crate::config::{CountrySelection, Palette};
use crate::summary::Totals;
use crate::utils::round2;
use crate::valuation::{GainClass, ValuedItem};
use std::io::{self, Write};

const BANNER_WIDTH: usize = 153;
const BANNER_TITLE: &str = "MTG Inventory Tool";

const ITEM_HEADERS: [&str; 10] = [
    "Product Name",
    "Date of Purchase",
    "Language",
    "Stock",
    "Cost Basis",
    "Expense",
    "Current Price",
    "Current Value",
    "Gain €",
    "Gain %",
];

const TOTAL_HEADERS: [&str; 5] = [
    "Items in Stock",
    "Total Expense",
    "Total Value",
    "Total Gain €",
    "Total Gain %",
];

/// Everything needed to print one country's section
#[derive(Debug, Clone)]
pub struct CountryReport<'a> {
    pub selection: CountrySelection,
    pub items: Vec<ValuedItem<'a>>,
    pub totals: Totals,
}

impl<'a> CountryReport<'a> {
    pub fn new(selection: CountrySelection, items: Vec<ValuedItem<'a>>) -> Self {
        let totals = Totals::from_items(&items);
        Self {
            selection,
            items,
            totals,
        }
    }

    pub fn title(&self) -> String {
        format!("MTG Stock Summary {}", self.selection.label())
    }
}

/// Banner printed once before any report
pub fn banner() -> String {
    let rule = format!("+{}+", "-".repeat(BANNER_WIDTH - 2));
    let inner = BANNER_WIDTH - 2;
    let left = (inner - BANNER_TITLE.len()) / 2;
    let right = inner - BANNER_TITLE.len() - left;
    format!(
        "{rule}\n+{}{}{}+\n{rule}\n",
        " ".repeat(left),
        BANNER_TITLE,
        " ".repeat(right)
    )
}

#[derive(Debug, Clone)]
struct Cell {
    text: String,
    class: Option<GainClass>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    fn colored(text: impl Into<String>, class: GainClass) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Left-aligned table with optional title row
struct Table {
    title: Option<String>,
    headers: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    fn new(title: Option<String>, headers: &[&str]) -> Self {
        Self {
            title,
            headers: headers.iter().map(|h| Cell::plain(*h)).collect(),
            rows: Vec::new(),
        }
    }

    fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(Cell::width).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        // Widen the last column if the title does not fit
        if let Some(title) = &self.title {
            let inner: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
            let needed = title.chars().count();
            if needed > inner {
                if let Some(last) = widths.last_mut() {
                    *last += needed - inner;
                }
            }
        }
        widths
    }

    fn render(&self, palette: &Palette) -> String {
        let widths = self.column_widths();
        let rule = format!(
            "+{}+\n",
            widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );

        let mut output = String::new();
        if let Some(title) = &self.title {
            let inner = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
            output.push_str(&format!("+{}+\n", "-".repeat(inner + 2)));
            output.push_str(&format!("| {:<inner$} |\n", title));
        }
        output.push_str(&rule);
        output.push_str(&render_row(&self.headers, &widths, palette));
        output.push_str(&rule);
        for row in &self.rows {
            output.push_str(&render_row(row, &widths, palette));
        }
        output.push_str(&rule);
        output
    }
}

fn render_row(cells: &[Cell], widths: &[usize], palette: &Palette) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = " ".repeat(width - cell.width());
            match cell.class {
                Some(class) => format!(
                    "{}{}{}{}",
                    color_token(palette, class),
                    cell.text,
                    palette.neutral,
                    padding
                ),
                None => format!("{}{}", cell.text, padding),
            }
        })
        .collect();
    format!("| {} |\n", rendered.join(" | "))
}

fn color_token(palette: &Palette, class: GainClass) -> &str {
    match class {
        GainClass::Gain => &palette.green,
        GainClass::Loss => &palette.red,
        GainClass::Unavailable => &palette.yellow,
    }
}

/// Whole quantities print without decimals
fn quantity(value: f64) -> String {
    round2(value).to_string()
}

fn money(value: f64) -> String {
    format!("{:.2} €", value)
}

/// Gains carry an explicit `+` when non-negative
fn signed(value: f64, decimals: usize, unit: &str) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.*} {}", sign, decimals, value, unit)
}

fn item_row(valued: &ValuedItem<'_>) -> Vec<Cell> {
    let item = valued.item;
    let v = &valued.valuation;
    let class = v.class();

    let mut row = vec![
        Cell::plain(item.name.clone()),
        Cell::plain(item.purchase_date.clone().unwrap_or_else(|| "-".to_string())),
        Cell::plain(item.language.clone()),
        Cell::plain(quantity(item.stock)),
        Cell::plain(money(item.cost_basis)),
        Cell::plain(money(v.expense)),
    ];

    match (v.lowest_price, v.current_value, v.absolute_gain) {
        (Some(price), Some(value), Some(gain)) => {
            let percentage = v
                .percentage_gain
                .map(|p| signed(p, 0, "%"))
                .unwrap_or_else(|| "NA".to_string());
            row.push(Cell::plain(money(price)));
            row.push(Cell::plain(money(value)));
            row.push(Cell::colored(signed(gain, 2, "€"), class));
            row.push(Cell::colored(percentage, class));
        }
        _ => {
            for _ in 0..4 {
                row.push(Cell::colored("NA", GainClass::Unavailable));
            }
        }
    }
    row
}

fn totals_row(totals: &Totals) -> Vec<Cell> {
    let class = totals.class();
    let percentage = totals
        .percentage_gain
        .map(|p| signed(p, 2, "%"))
        .unwrap_or_else(|| "NA".to_string());
    vec![
        Cell::plain(quantity(totals.stock)),
        Cell::plain(money(totals.expense)),
        Cell::plain(money(totals.value)),
        Cell::colored(signed(totals.absolute_gain, 2, "€"), class),
        Cell::colored(percentage, class),
    ]
}

/// Renders reports with an explicit palette
pub struct Renderer<'p> {
    palette: &'p Palette,
}

impl<'p> Renderer<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    pub fn item_table(&self, report: &CountryReport<'_>) -> String {
        let mut table = Table::new(Some(report.title()), &ITEM_HEADERS);
        for valued in &report.items {
            table.add_row(item_row(valued));
        }
        table.render(self.palette)
    }

    pub fn totals_table(&self, totals: &Totals) -> String {
        let mut table = Table::new(None, &TOTAL_HEADERS);
        table.add_row(totals_row(totals));
        let mut output = table.render(self.palette);

        if totals.priced_at_cost > 0 {
            output.push_str(&format!(
                "{}Note: {} item(s) without a current price are counted at cost in Total Value.{}\n",
                self.palette.yellow, totals.priced_at_cost, self.palette.neutral
            ));
        }
        output
    }

    pub fn country(&self, report: &CountryReport<'_>) -> String {
        format!(
            "{}{}",
            self.item_table(report),
            self.totals_table(&report.totals)
        )
    }
}

/// Output phase for reports; restores the neutral color when dropped
pub struct ReportSession<'p, W: Write> {
    out: W,
    renderer: Renderer<'p>,
    palette: &'p Palette,
}

impl<'p, W: Write> ReportSession<'p, W> {
    pub fn begin(mut out: W, palette: &'p Palette) -> io::Result<Self> {
        out.write_all(palette.neutral.as_bytes())?;
        out.write_all(banner().as_bytes())?;
        Ok(Self {
            out,
            renderer: Renderer::new(palette),
            palette,
        })
    }

    /// Prints one country section followed by a blank line
    pub fn write_country(&mut self, report: &CountryReport<'_>) -> io::Result<()> {
        self.out.write_all(self.renderer.country(report).as_bytes())?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<'p, W: Write> Drop for ReportSession<'p, W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(self.palette.neutral.as_bytes());
        let _ = self.out.flush();
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
