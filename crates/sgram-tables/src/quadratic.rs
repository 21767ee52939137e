use sgram_core::{Family, FormulaParts, PatternSet, SGramNotation, SequenceFamily, SgramError};

use crate::overflow;

/// 2nd power N-Grams (S-Grams): `N₂(n) = 1 + (1 + n)²`.
///
/// Unlike the other polynomial families the cycles are hand-curated literal
/// data, one record per index `0..=11`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quadratic;

struct SGramRecord {
    catalan: u64,
    numerator: u64,
    denominator: u64,
    symbolic: &'static str,
    transformation: &'static str,
    base: u64,
    expansion: u64,
    patterns: &'static [(&'static str, &'static [u64])],
    factors: &'static [(&'static str, &'static [u64])],
}

fn record(index: usize) -> Result<&'static SGramRecord, SgramError> {
    RECORDS.get(index).ok_or_else(|| {
        SgramError::index_out_of_range(Family::Quadratic.key(), index, RECORDS.len() - 1)
    })
}

impl SequenceFamily for Quadratic {
    fn family(&self) -> Family {
        Family::Quadratic
    }

    fn symbol(&self, index: usize) -> String {
        format!("s{}", index + 1)
    }

    fn compute_value(&self, index: usize) -> Result<u64, SgramError> {
        u64::try_from(index)
            .ok()
            .and_then(|index| index.checked_add(1))
            .and_then(|base| base.checked_pow(2))
            .and_then(|square| square.checked_add(1))
            .ok_or_else(|| overflow(Family::Quadratic, index))
    }

    fn formula(&self, index: usize, value: u64) -> String {
        let square = value.saturating_sub(1);
        format!("N₂({index}) = 1 + (1+{index})² = 1 + {square} = {value}")
    }

    fn formula_parts(&self, index: usize, _value: u64) -> FormulaParts {
        let mut parts = FormulaParts::new();
        if let Ok(record) = record(index) {
            parts.insert("base".to_string(), record.base);
            parts.insert("expansion".to_string(), record.expansion);
        }
        parts
    }

    fn patterns(&self, index: usize, _value: u64) -> Result<PatternSet, SgramError> {
        let record = record(index)?;
        Ok(PatternSet::builder()
            .patterns(record.patterns.iter().copied())?
            .factors(record.factors.iter().copied())?
            .build())
    }

    fn notation(&self, index: usize) -> Option<SGramNotation> {
        record(index).ok().map(|record| SGramNotation {
            catalan_number: record.catalan,
            numerator: record.numerator,
            denominator: record.denominator,
            symbolic: record.symbolic.to_string(),
            transformation: record.transformation.to_string(),
        })
    }
}

#[rustfmt::skip]
const RECORDS: [SGramRecord; 12] = [
    SGramRecord {
        catalan: 1,
        numerator: 0,
        denominator: 0,
        symbolic: "[0)(0] = [0] ~> [-] = ()",
        transformation: "[(][)] = (][)(][) = (-) = () = O",
        base: 1,
        expansion: 0,
        patterns: &[
            ("0/1", &[0]),
        ],
        factors: &[],
    },
    SGramRecord {
        catalan: 2,
        numerator: 1,
        denominator: 1,
        symbolic: "[1)(1] = [1] ~> [(0)] = []",
        transformation: "[)(] = )[()]( = )|( = ][ = I",
        base: 1,
        expansion: 1,
        patterns: &[
            ("1/1", &[1]),
        ],
        factors: &[
            ("1/1", &[1]),
        ],
    },
    SGramRecord {
        catalan: 5,
        numerator: 2,
        denominator: 4,
        symbolic: "[2)(1] = [2] ~> [([1])] = [([])]",
        transformation: "[()] = [(][)] = [(I)] = IO",
        base: 2,
        expansion: 3,
        patterns: &[
            ("1/3", &[1, 3]),
            ("1/2", &[2]),
        ],
        factors: &[
            ("1/1", &[4]),
        ],
    },
    SGramRecord {
        catalan: 14,
        numerator: 3,
        denominator: 9,
        symbolic: "[3)(1] = [3] ~> [([2])] = [([()])]",
        transformation: "[(())]",
        base: 3,
        expansion: 7,
        patterns: &[
            ("1/7", &[1, 4, 2, 8, 5, 7]),
            ("1/3", &[3, 6]),
        ],
        factors: &[
            ("1/1", &[9]),
        ],
    },
    SGramRecord {
        catalan: 42,
        numerator: 4,
        denominator: 16,
        symbolic: "[4] = [2][2] = [(1)][(1)]",
        transformation: "[()][()] = [()()]",
        base: 4,
        expansion: 13,
        patterns: &[
            ("1/13", &[1, 5, 3, 15, 11, 13]),
            ("2/13", &[2, 10, 7, 14, 6, 9]),
            ("1/4", &[4, 8, 12]),
        ],
        factors: &[
            ("1/4", &[4, 12]),
            ("1/2", &[8]),
            ("1/1", &[16]),
        ],
    },
    SGramRecord {
        catalan: 132,
        numerator: 5,
        denominator: 25,
        symbolic: "[5] ~> [([3])] = [([(())])]",
        transformation: "[((()))]",
        base: 5,
        expansion: 21,
        patterns: &[
            ("1/21", &[1, 6, 4, 24, 19, 21]),
            ("2/21", &[2, 12, 9, 23, 13, 16]),
            ("3/21", &[3, 18, 14, 22, 7, 11]),
            ("7/21", &[8, 17]),
            ("1/5", &[5, 10, 15, 20]),
        ],
        factors: &[
            ("1/1", &[25]),
        ],
    },
    SGramRecord {
        catalan: 429,
        numerator: 6,
        denominator: 36,
        symbolic: "[6] = [2][3] = [()][(())]",
        transformation: "[()(())]",
        base: 6,
        expansion: 31,
        patterns: &[
            ("1/31", &[1, 7, 5, 35, 29, 31]),
            ("2/31", &[2, 14, 11, 34, 22, 25]),
            ("3/31", &[3, 21, 17, 33, 15, 19]),
            ("4/31", &[4, 28, 23, 32, 8, 13]),
            ("8/31", &[9, 20, 10, 27, 16, 26]),
            ("1/6", &[6, 12, 18, 24, 30]),
        ],
        factors: &[
            ("1/6", &[6, 30]),
            ("1/3", &[12, 24]),
            ("1/2", &[18]),
            ("1/1", &[36]),
        ],
    },
    SGramRecord {
        catalan: 1430,
        numerator: 7,
        denominator: 49,
        symbolic: "[7] = [([4])] = [([()()])]",
        transformation: "[(()())]",
        base: 7,
        expansion: 43,
        patterns: &[
            ("1/43", &[1, 8, 6, 48, 41, 43]),
            ("2/43", &[2, 16, 13, 47, 33, 36]),
            ("3/43", &[3, 24, 20, 46, 25, 29]),
            ("4/43", &[4, 32, 27, 45, 17, 22]),
            ("5/43", &[5, 40, 34, 44, 9, 15]),
            ("9/43", &[10, 23, 12, 39, 26, 37]),
            ("10/43", &[11, 31, 19, 38, 18, 30]),
            ("1/7", &[7, 14, 21, 28, 35, 42]),
        ],
        factors: &[
            ("1/1", &[49]),
        ],
    },
    SGramRecord {
        catalan: 4862,
        numerator: 8,
        denominator: 64,
        symbolic: "[8] = [2][2][2] = [3[2]] = [()][()][()]",
        transformation: "[()()()]",
        base: 8,
        expansion: 57,
        patterns: &[
            ("1/57", &[1, 9, 7, 63, 55, 57]),
            ("2/57", &[2, 18, 15, 62, 46, 49]),
            ("3/57", &[3, 27, 23, 61, 37, 41]),
            ("4/57", &[4, 36, 31, 60, 28, 33]),
            ("5/57", &[5, 45, 39, 59, 19, 25]),
            ("6/57", &[6, 54, 47, 58, 10, 17]),
            ("10/57", &[11, 26, 14, 53, 38, 50]),
            ("11/57", &[12, 35, 22, 52, 29, 42]),
            ("12/57", &[13, 44, 30, 51, 20, 34]),
            ("19/57", &[21, 43]),
            ("1/8", &[8, 16, 24, 32, 40, 48, 56]),
        ],
        factors: &[
            ("1/8", &[8, 24, 40, 56]),
            ("1/4", &[16, 48]),
            ("1/2", &[32]),
            ("1/1", &[64]),
        ],
    },
    SGramRecord {
        catalan: 16796,
        numerator: 9,
        denominator: 81,
        symbolic: "[9] = [3][3] = [2[3]] = [(())][(())]",
        transformation: "[(())(())]",
        base: 9,
        expansion: 73,
        patterns: &[
            ("1/73", &[1, 10, 8, 80, 71, 73]),
            ("2/73", &[2, 20, 17, 79, 61, 64]),
            ("3/73", &[3, 30, 26, 78, 51, 55]),
            ("4/73", &[4, 40, 35, 77, 41, 46]),
            ("5/73", &[5, 50, 44, 76, 31, 37]),
            ("6/73", &[6, 60, 53, 75, 21, 28]),
            ("7/73", &[7, 70, 62, 74, 11, 19]),
            ("11/73", &[12, 29, 16, 69, 52, 65]),
            ("12/73", &[13, 39, 25, 68, 42, 56]),
            ("13/73", &[14, 49, 34, 67, 32, 47]),
            ("14/73", &[15, 59, 43, 66, 22, 38]),
            ("21/73", &[23, 48, 24, 58, 33, 57]),
            ("1/9", &[9, 18, 27, 36, 45, 54, 63, 72]),
        ],
        factors: &[
            ("1/9", &[9, 18, 36, 45, 63, 72]),
            ("1/3", &[27, 54]),
            ("1/1", &[81]),
        ],
    },
    SGramRecord {
        catalan: 58786,
        numerator: 10,
        denominator: 100,
        symbolic: "[10] = [2][5] = [()][((()))]",
        transformation: "[()((()))]",
        base: 10,
        expansion: 91,
        patterns: &[
            ("1/91", &[1, 11, 9, 99, 89, 91]),
            ("2/91", &[2, 22, 19, 98, 78, 81]),
            ("3/91", &[3, 33, 29, 97, 67, 71]),
            ("4/91", &[4, 44, 39, 96, 56, 61]),
            ("5/91", &[5, 55, 49, 95, 45, 51]),
            ("6/91", &[6, 66, 59, 94, 34, 41]),
            ("7/91", &[7, 77, 69, 93, 23, 31]),
            ("8/91", &[8, 88, 79, 92, 12, 21]),
            ("12/91", &[13, 32, 18, 87, 68, 82]),
            ("13/91", &[14, 43, 28, 86, 57, 72]),
            ("14/91", &[15, 54, 38, 85, 46, 62]),
            ("15/91", &[16, 65, 48, 84, 35, 52]),
            ("16/91", &[17, 76, 58, 83, 24, 42]),
            ("23/91", &[25, 53, 27, 75, 47, 73]),
            ("24/91", &[26, 64, 37, 74, 36, 63]),
            ("1/10", &[10, 20, 30, 40, 50, 60, 70, 80, 90]),
        ],
        factors: &[
            ("1/10", &[10, 30, 70, 90]),
            ("1/5", &[20, 40, 60, 80]),
            ("1/2", &[50]),
            ("1/1", &[100]),
        ],
    },
    SGramRecord {
        catalan: 208012,
        numerator: 11,
        denominator: 121,
        symbolic: "[11] = [[5]] = [[((()))]]",
        transformation: "[(((())))]",
        base: 11,
        expansion: 111,
        patterns: &[
            ("1/111", &[1, 12, 10, 120, 109, 111]),
            ("2/111", &[2, 24, 21, 119, 97, 100]),
            ("3/111", &[3, 36, 32, 118, 85, 89]),
            ("4/111", &[4, 48, 43, 117, 73, 78]),
            ("5/111", &[5, 60, 54, 116, 61, 67]),
            ("6/111", &[6, 72, 65, 115, 49, 56]),
            ("7/111", &[7, 84, 76, 114, 37, 45]),
            ("8/111", &[8, 96, 87, 113, 25, 34]),
            ("9/111", &[9, 108, 98, 112, 13, 23]),
            ("13/111", &[14, 35, 20, 107, 86, 101]),
            ("14/111", &[15, 47, 31, 106, 74, 90]),
            ("15/111", &[16, 59, 42, 105, 62, 79]),
            ("16/111", &[17, 71, 53, 104, 50, 68]),
            ("17/111", &[18, 83, 64, 103, 38, 57]),
            ("18/111", &[19, 95, 75, 102, 26, 46]),
            ("25/111", &[27, 58, 30, 94, 63, 91]),
            ("26/111", &[28, 70, 41, 93, 51, 80]),
            ("27/111", &[29, 82, 52, 92, 39, 69]),
            ("37/111", &[40, 81]),
            ("1/11", &[11, 22, 33, 44, 55, 66, 77, 88, 99, 110]),
        ],
        factors: &[
            ("1/1", &[121]),
        ],
    },
];
