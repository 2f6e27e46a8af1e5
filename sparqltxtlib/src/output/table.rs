//! Column-aligned plain-text tables for SELECT results.
//!
//! The data flow is:
//! 1. Result source (columns + lazily produced rows)
//! 2. TextTable (every cell rendered, per-column widths measured)
//! 3. Text block (centered header, rule, sorted left-justified body)
//!
//! Every column is as wide as its widest cell or header. Header names are
//! centered and joined with `|`; the rule under them is exactly as long as
//! the header line. Body fields are left-justified and concatenated
//! directly, the padding being the only column boundary. Widths count
//! characters, not bytes.

use log::debug;

use crate::data::{Namespaces, ResultSource};
use crate::error::SparqlTxtError;
use crate::options::TableOptions;
use crate::output::sink::{emit, OutputSink};
use crate::output::term::render_term;
use crate::Result;

/// Text written for a result with no rows.
pub const NO_RESULTS: &str = "(no results)\n";

/// Fully rendered, measured table.
///
/// Cells are final strings; `widths[i]` is the widest of `headers[i]` and
/// every `rows[_][i]`, in characters. Only [`TextTable::from_source`] builds
/// one, so the widths always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTable {
    headers: Vec<String>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Render and measure every cell of `source`.
    ///
    /// Returns `Ok(None)` when the source has no rows, and
    /// [`SparqlTxtError::ShapeMismatch`] when it is not SELECT-shaped.
    pub fn from_source<S: ResultSource>(
        source: S,
        namespaces: Option<&dyn Namespaces>,
    ) -> Result<Option<Self>> {
        let kind = source.kind();
        if !kind.is_tabular() {
            return Err(SparqlTxtError::ShapeMismatch { kind });
        }

        let columns = source.columns().to_vec();
        let headers: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
        let mut widths: Vec<usize> = headers.iter().map(|h| text_width(h)).collect();

        let mut rows = Vec::new();
        for row in source.into_rows() {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| render_term(row.get(column), namespaces))
                .collect();
            for (width, cell) in widths.iter_mut().zip(&cells) {
                *width = (*width).max(text_width(cell));
            }
            rows.push(cells);
        }

        if rows.is_empty() {
            debug!("no rows for {} columns", headers.len());
            return Ok(None);
        }
        debug!(
            "rendered {} rows over {} columns, widths {:?}",
            rows.len(),
            headers.len(),
            widths
        );

        Ok(Some(Self {
            headers,
            widths,
            rows,
        }))
    }

    /// Column names, in projection order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column widths in characters
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Rendered cells, in source order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Header line: each name centered in its column, joined with `|`.
    pub fn header_line(&self) -> String {
        self.headers
            .iter()
            .zip(&self.widths)
            .map(|(name, &width)| center(name, width))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Rule line, as long as the header line.
    pub fn rule_line(&self) -> String {
        let separators = self.widths.len().saturating_sub(1);
        "-".repeat(separators + self.widths.iter().sum::<usize>())
    }

    /// Body rows ordered by their cell tuples.
    pub fn sorted_rows(&self) -> Vec<&[String]> {
        let mut rows: Vec<&[String]> = self.rows.iter().map(Vec::as_slice).collect();
        rows.sort();
        rows
    }

    /// One body line: each cell left-justified to its column width.
    pub fn body_line(&self, cells: &[String]) -> String {
        let mut line = String::new();
        for (cell, &width) in cells.iter().zip(&self.widths) {
            line.push_str(cell);
            push_spaces(&mut line, width.saturating_sub(text_width(cell)));
        }
        line
    }

    /// The complete table text, one `\n` after every line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header_line());
        out.push('\n');
        out.push_str(&self.rule_line());
        out.push('\n');
        for cells in self.sorted_rows() {
            out.push_str(&self.body_line(cells));
            out.push('\n');
        }
        out
    }
}

/// Render a result to text, including the empty-result line.
pub fn render_text<S: ResultSource>(source: S, options: &TableOptions<'_>) -> Result<String> {
    Ok(match TextTable::from_source(source, options.namespaces)? {
        Some(table) => table.to_text(),
        None => NO_RESULTS.to_string(),
    })
}

/// Render a result and write it to `sink` in the configured encoding.
///
/// Nothing is written when the result is not SELECT-shaped.
pub fn write_table<S: ResultSource>(
    source: S,
    options: &TableOptions<'_>,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    let text = render_text(source, options)?;
    emit(&text, &options.encoding, sink)
}

/// Center `text` in `width`; any odd space goes to the right.
fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text));
    let left = pad / 2;
    let mut out = String::with_capacity(text.len() + pad);
    push_spaces(&mut out, left);
    out.push_str(text);
    push_spaces(&mut out, pad - left);
    out
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Column, PrefixMap, QueryResult, ResultKind, Row, Value};
    use crate::output::sink::{ByteSink, TextSink};

    fn lit_row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(column, lexical)| (*column, Value::literal(*lexical)))
            .collect()
    }

    fn iri_row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(column, iri)| (*column, Value::iri(*iri)))
            .collect()
    }

    fn render(result: QueryResult) -> String {
        render_text(result, &TableOptions::new()).unwrap()
    }

    #[test]
    fn test_center() {
        assert_eq!(center("s", 1), "s");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("", 3), "   ");
    }

    #[test]
    fn test_center_pad_split() {
        for width in 3..10 {
            let text = "abc";
            let centered = center(text, width);
            let left = centered.len() - centered.trim_start().len();
            let right = centered.len() - centered.trim_end().len();
            assert_eq!(left, (width - 3) / 2);
            assert_eq!(right, (width - 3).div_ceil(2));
            assert_eq!(left + right + 3, width);
        }
    }

    #[test]
    fn test_empty_result() {
        let result = QueryResult::select(["x", "y"], vec![]);
        assert_eq!(render(result), "(no results)\n");
    }

    #[test]
    fn test_unbound_cell() {
        let result = QueryResult::select(["x"], vec![Row::new()]);
        assert_eq!(render(result), "x\n-\n-\n");
    }

    #[test]
    fn test_two_columns_widths() {
        // Cells are bare IRIs via a table that compresses everything to its local part.
        let strip = |iri: &str| iri.strip_prefix("urn:").map(str::to_string);
        let result = QueryResult::select(
            ["s", "obj"],
            vec![
                iri_row(&[("s", "urn:a"), ("obj", "urn:bb")]),
                iri_row(&[("s", "urn:c"), ("obj", "urn:ddd")]),
            ],
        );
        let table = TextTable::from_source(result, Some(&strip))
            .unwrap()
            .unwrap();

        assert_eq!(table.widths(), [1, 3]);
        assert_eq!(table.header_line(), "s|obj");
        assert_eq!(table.rule_line(), "-----");
        assert_eq!(table.to_text(), "s|obj\n-----\nabb \ncddd\n");
    }

    #[test]
    fn test_width_covers_header_and_cells() {
        let result = QueryResult::select(
            ["name", "n"],
            vec![
                lit_row(&[("name", "a"), ("n", "12345")]),
                lit_row(&[("name", "bb"), ("n", "1")]),
            ],
        );
        let table = TextTable::from_source(result, None).unwrap().unwrap();

        // "name" (4) beats "\"bb\"" (4) and "\"a\"" (3); "\"12345\"" (7) beats "n"
        assert_eq!(table.widths(), [4, 7]);
        assert_eq!(table.header_line(), "name|   n   ");
        assert_eq!(table.rule_line().len(), table.header_line().len());
        for row in table.rows() {
            for (cell, &width) in row.iter().zip(table.widths()) {
                assert!(cell.chars().count() <= width);
            }
            assert_eq!(
                table.body_line(row).chars().count(),
                table.widths().iter().sum::<usize>()
            );
        }
    }

    #[test]
    fn test_body_line_cell_wider_than_column() {
        let table = TextTable {
            headers: vec!["x".to_string()],
            widths: vec![1],
            rows: vec![vec!["abc".to_string()]],
        };
        assert_eq!(table.body_line(&table.rows[0]), "abc");
        assert_eq!(table.to_text(), "x\n-\nabc\n");
    }

    #[test]
    fn test_body_is_sorted_by_cell_tuple() {
        let rows = vec![
            lit_row(&[("a", "b"), ("b", "1")]),
            lit_row(&[("a", "a"), ("b", "2")]),
            lit_row(&[("a", "b"), ("b", "0")]),
            lit_row(&[("a", "B"), ("b", "9")]),
        ];
        let text = render(QueryResult::select(["a", "b"], rows));
        let body: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(body, vec!["\"B\"\"9\"", "\"a\"\"2\"", "\"b\"\"0\"", "\"b\"\"1\""]);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let rows = vec![
            iri_row(&[("s", "http://example.org/z")]),
            iri_row(&[("s", "http://example.org/a")]),
            Row::new(),
            iri_row(&[("s", "http://example.org/m")]),
        ];
        let mut reversed = rows.clone();
        reversed.reverse();

        let first = render(QueryResult::select(["s"], rows));
        let second = render(QueryResult::select(["s"], reversed));
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_is_deterministic() {
        let prefixes = PrefixMap::new().bind("ex", "http://example.org/").unwrap();
        let options = TableOptions::new().namespaces(&prefixes);
        let result = QueryResult::select(
            ["s", "label"],
            vec![
                Row::new()
                    .with("s", Value::iri("http://example.org/p"))
                    .with("label", Value::lang_literal("thing", "en")),
                Row::new().with("s", Value::blank("b1")),
            ],
        );

        let first = render_text(result.clone(), &options).unwrap();
        let second = render_text(result, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            " s  |  label   \n---------------\n_:b1-         \nex:p\"thing\"@en\n"
        );
    }

    #[test]
    fn test_columns_keep_projection_order() {
        let result = QueryResult::select(
            ["z", "a"],
            vec![lit_row(&[("z", "first"), ("a", "second")])],
        );
        let table = TextTable::from_source(result, None).unwrap().unwrap();
        assert_eq!(table.headers(), ["z", "a"]);
        assert_eq!(table.rows()[0], vec!["\"first\"", "\"second\""]);
    }

    #[test]
    fn test_widths_count_characters() {
        let result = QueryResult::select(["x"], vec![lit_row(&[("x", "héllo")])]);
        let table = TextTable::from_source(result, None).unwrap().unwrap();
        assert_eq!(table.widths(), [7]);
        assert_eq!(table.header_line(), "   x   ");
    }

    #[test]
    fn test_shape_mismatch_writes_nothing() {
        for kind in [ResultKind::Ask, ResultKind::Construct, ResultKind::Describe] {
            let result = if kind == ResultKind::Ask {
                QueryResult::ask(true)
            } else {
                QueryResult::graph(kind)
            };
            let mut sink = ByteSink::new(Vec::new());
            let err = write_table(result, &TableOptions::new(), &mut sink).unwrap_err();

            assert!(matches!(err, SparqlTxtError::ShapeMismatch { kind: k } if k == kind));
            assert!(sink.into_inner().is_empty());
        }
    }

    #[test]
    fn test_write_table_encodes() {
        let result = QueryResult::select(["x"], vec![lit_row(&[("x", "é")])]);
        let mut sink = ByteSink::new(Vec::new());
        write_table(result, &TableOptions::new().encoding("latin1"), &mut sink).unwrap();
        assert_eq!(sink.into_inner(), b" x \n---\n\"\xe9\"\n");
    }

    #[test]
    fn test_write_table_to_text_sink() {
        let result = QueryResult::select(["x"], vec![]);
        let mut sink = TextSink::new(String::new());
        write_table(result, &TableOptions::new(), &mut sink).unwrap();
        assert_eq!(sink.into_inner(), NO_RESULTS);
    }

    #[test]
    fn test_lazy_source() {
        struct Counting {
            columns: Vec<Column>,
            n: usize,
        }

        impl ResultSource for Counting {
            type Rows = Box<dyn Iterator<Item = Row>>;

            fn kind(&self) -> ResultKind {
                ResultKind::Select
            }

            fn columns(&self) -> &[Column] {
                &self.columns
            }

            fn into_rows(self) -> Self::Rows {
                Box::new(
                    (0..self.n)
                        .rev()
                        .map(|i| Row::new().with("i", Value::literal(i.to_string()))),
                )
            }
        }

        let source = Counting {
            columns: vec![Column::new("i")],
            n: 3,
        };
        let text = render_text(source, &TableOptions::new()).unwrap();
        assert_eq!(text, " i \n---\n\"0\"\n\"1\"\n\"2\"\n");
    }
}
