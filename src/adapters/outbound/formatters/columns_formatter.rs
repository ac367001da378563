use crate::application::dto::UsesResponse;
use crate::ports::outbound::DependentsFormatter;
use crate::shared::Result;

const GAP: usize = 2;

/// ColumnsFormatter adapter for the flat dependents list
///
/// With a known terminal width the names are laid out column-major, like
/// `ls`. Without one (stdout is not a terminal), or when fewer than two
/// columns fit, every name goes on its own line.
pub struct ColumnsFormatter {
    width: Option<usize>,
}

impl ColumnsFormatter {
    /// Creates a formatter for a terminal `width` columns wide, or for
    /// plain line output when `width` is `None`
    pub fn new(width: Option<usize>) -> Self {
        Self { width }
    }

    fn one_per_line(names: &[String]) -> String {
        let mut output = names.join("\n");
        output.push('\n');
        output
    }

    fn columns(names: &[String], width: usize) -> String {
        let lengths: Vec<usize> = names
            .iter()
            .map(|name| console::measure_text_width(name))
            .collect();
        let longest = lengths.iter().copied().max().unwrap_or(0);

        let cols = (width + GAP) / (longest + GAP);
        if cols < 2 {
            return Self::one_per_line(names);
        }

        let rows = names.len().div_ceil(cols);
        // Recompute so there are no empty trailing columns
        let cols = names.len().div_ceil(rows);
        let col_width = (width + GAP) / cols - GAP;
        let gap = " ".repeat(GAP);

        let mut output = String::new();
        for row in 0..rows {
            let indices: Vec<usize> = (row..names.len()).step_by(rows).collect();
            let Some((&last, leading)) = indices.split_last() else {
                continue;
            };

            let mut cells: Vec<String> = leading
                .iter()
                .map(|&i| {
                    let padding = col_width.saturating_sub(lengths[i]);
                    format!("{}{}", names[i], " ".repeat(padding))
                })
                .collect();
            cells.push(names[last].clone());

            output.push_str(&cells.join(&gap));
            output.push('\n');
        }
        output
    }
}

impl Default for ColumnsFormatter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DependentsFormatter for ColumnsFormatter {
    fn format(&self, response: &UsesResponse) -> Result<String> {
        let names = &response.dependents;
        if names.is_empty() {
            return Ok(String::new());
        }

        Ok(match self.width {
            Some(width) => Self::columns(names, width),
            None => Self::one_per_line(names),
        })
    }
}
