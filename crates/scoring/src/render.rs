use crate::dto::{ResultRow, ScoreCell};
use crate::models::RaceId;

/// Render ranked rows as a CSV table.
///
/// Header is `RANK,Sail Number,Name,R<race_id>,...,TOTAL,NET`, one data
/// row per entry. A race cell is empty when it has no score, otherwise
/// the score to one decimal, the penalty annotation appended after a
/// space, and the whole cell parenthesized when the race is discarded
/// (`"(6.0 DNC)"`). Fields containing a comma, quote or line break are
/// double-quoted with inner quotes doubled.
pub fn to_csv_string(rows: &[ResultRow], race_ids: &[RaceId]) -> String {
    let mut header: Vec<String> = vec![
        "RANK".to_string(),
        "Sail Number".to_string(),
        "Name".to_string(),
    ];
    header.extend(race_ids.iter().map(|rid| format!("R{rid}")));
    header.push("TOTAL".to_string());
    header.push("NET".to_string());

    let mut out = String::new();
    push_record(&mut out, &header);

    for row in rows {
        let mut fields: Vec<String> = vec![
            row.rank_display.clone(),
            row.sail_number.to_string(),
            row.name.clone(),
        ];
        fields.extend(row.cells.iter().map(format_cell));
        fields.push(format!("{:.1}", row.total));
        fields.push(format!("{:.1}", row.net));
        push_record(&mut out, &fields);
    }

    out
}

fn format_cell(cell: &ScoreCell) -> String {
    let Some(score) = cell.score else {
        return String::new();
    };
    let mut text = format!("{score:.1}");
    if let Some(code) = &cell.annotation {
        text.push(' ');
        text.push_str(code);
    }
    if cell.discarded {
        format!("({text})")
    } else {
        text
    }
}

// CRLF record terminator and minimal quoting, the way csv writers emit.
fn push_record(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SailNumber;

    fn cell(score: Option<f64>, discarded: bool, annotation: Option<&str>) -> ScoreCell {
        ScoreCell {
            score,
            discarded,
            annotation: annotation.map(String::from),
        }
    }

    fn row(sail: &str, name: &str, rank: i64, cells: Vec<ScoreCell>, total: f64, net: f64) -> ResultRow {
        ResultRow {
            sail_number: SailNumber::new(sail),
            name: name.to_string(),
            rank,
            rank_display: crate::services::rank_display(rank),
            cells,
            total,
            net,
        }
    }

    #[test]
    fn test_header_and_rows() {
        let rows = vec![
            row(
                "USA 42",
                "Alice",
                1,
                vec![cell(Some(1.0), false, None), cell(Some(2.0), false, None)],
                3.0,
                3.0,
            ),
            row(
                "GBR 7",
                "Bob",
                2,
                vec![cell(Some(2.0), false, None), cell(Some(1.0), false, None)],
                3.0,
                3.0,
            ),
        ];
        let race_ids = vec![RaceId::new("1"), RaceId::new("2")];

        let csv = to_csv_string(&rows, &race_ids);

        assert_eq!(
            csv,
            "RANK,Sail Number,Name,R1,R2,TOTAL,NET\r\n\
             1st,USA 42,Alice,1.0,2.0,3.0,3.0\r\n\
             2nd,GBR 7,Bob,2.0,1.0,3.0,3.0\r\n"
        );
    }

    #[test]
    fn test_cell_forms() {
        let rows = vec![row(
            "A",
            "Crew",
            1,
            vec![
                cell(None, false, None),
                cell(Some(3.0), false, None),
                cell(Some(6.0), false, Some("DNC")),
                cell(Some(5.0), true, None),
                cell(Some(6.0), true, Some("DNC")),
            ],
            20.0,
            9.0,
        )];
        let race_ids: Vec<RaceId> = (1..=5).map(|n| RaceId::new(n.to_string())).collect();

        let csv = to_csv_string(&rows, &race_ids);
        let data_line = csv.lines().nth(1).unwrap();

        assert_eq!(data_line, "1st,A,Crew,,3.0,6.0 DNC,(5.0),(6.0 DNC),20.0,9.0");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let rows = vec![row(
            "A",
            "Smith, Jane",
            1,
            vec![cell(Some(1.0), false, None)],
            1.0,
            1.0,
        )];

        let csv = to_csv_string(&rows, &[RaceId::new("1")]);
        let data_line = csv.lines().nth(1).unwrap();

        assert_eq!(data_line, "1st,A,\"Smith, Jane\",1.0,1.0,1.0");
    }

    #[test]
    fn test_quotes_doubled_inside_quoted_field() {
        let rows = vec![row(
            "A",
            "the \"Flying\" Scot",
            1,
            vec![cell(Some(1.0), false, None)],
            1.0,
            1.0,
        )];

        let csv = to_csv_string(&rows, &[RaceId::new("1")]);
        let data_line = csv.lines().nth(1).unwrap();

        assert_eq!(data_line, "1st,A,\"the \"\"Flying\"\" Scot\",1.0,1.0,1.0");
    }

    #[test]
    fn test_empty_rows_render_header_only() {
        let csv = to_csv_string(&[], &[RaceId::new("1")]);
        assert_eq!(csv, "RANK,Sail Number,Name,R1,TOTAL,NET\r\n");
    }
}
