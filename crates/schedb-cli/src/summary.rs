use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use schedb_cli::pipeline::ConvertOutcome;
use schedb_transform::DepartmentSummary;

pub fn print_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.infile.display());
    if outcome.written {
        println!("Output: {}", outcome.outfile.display());
    } else {
        println!("Output: {} (dry run, not written)", outcome.outfile.display());
    }
    println!("Generated: {}", outcome.generated);
    println!("{}", summary_table(&outcome.summary.departments, &outcome.summary.totals()));
}

fn summary_table(departments: &[DepartmentSummary], totals: &DepartmentSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dept"),
        header_cell("Name"),
        header_cell("Courses"),
        header_cell("Sections"),
        header_cell("Periods"),
        header_cell("Notes"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for dept in departments {
        table.add_row(vec![
            Cell::new(&dept.abbrev)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            name_cell(dept),
            Cell::new(dept.courses),
            Cell::new(dept.sections),
            Cell::new(dept.periods),
            count_cell(dept.notes),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} departments", departments.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.courses).add_attribute(Attribute::Bold),
        Cell::new(totals.sections).add_attribute(Attribute::Bold),
        Cell::new(totals.periods).add_attribute(Attribute::Bold),
        count_cell(totals.notes).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

/// Unexpanded codes are shown dimmed.
fn name_cell(dept: &DepartmentSummary) -> Cell {
    if dept.name == dept.abbrev {
        dim_cell(&dept.name)
    } else {
        Cell::new(&dept.name)
    }
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell("-")
    } else {
        Cell::new(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(abbrev: &str, name: &str, courses: usize) -> DepartmentSummary {
        DepartmentSummary {
            abbrev: abbrev.to_string(),
            name: name.to_string(),
            courses,
            sections: courses * 2,
            periods: courses * 3,
            notes: 0,
        }
    }

    #[test]
    fn table_has_a_row_per_department_and_total() {
        let departments = vec![dept("CSCI", "Computer Science", 2), dept("XXXX", "XXXX", 1)];
        let totals = DepartmentSummary {
            courses: 3,
            sections: 6,
            periods: 9,
            ..DepartmentSummary::default()
        };
        let table = summary_table(&departments, &totals);
        assert_eq!(table.row_count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("Computer Science"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("2 departments"));
    }
}
