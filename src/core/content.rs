// Authored page content and the point-card decoration lookup.
//
// Everything here is static data: the chapter records themselves and an
// ordered prefix table mapping point copy to a small decorative glyph. The
// table is checked first-match, so more specific prefixes must come before
// shorter ones that could shadow them.

/// One full-height chapter of the page. `points` may be empty and `subtitle`
/// absent; rendering omits the corresponding markup.
#[derive(Clone, Copy, Debug)]
pub struct ContentSection {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub points: &'static [&'static str],
    pub is_dark: bool,
}

/// Decoration drawn above a point card, keyed off the point's text prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointGlyph {
    Dot,
    DiagonalLine,
    StackedPlanes,
    PositiveForm,
    NegativeForm,
    FrontFaces,
    CrossSection,
    InvertedHalves,
    TrimFrame,
    DotCluster,
    OutlinedDiamond,
    ScaleContrast,
    TypeSpecimen,
    Rhetoric,
    GestaltArcs,
    ObservingEye,
    ScatteredBlocks,
    AssembledFrame,
    ValueGem,
}

/// Ordered prefix-dispatch table. First match wins; points that match nothing
/// render without a glyph.
pub const PREFIX_GLYPHS: &[(&str, PointGlyph)] = &[
    ("점", PointGlyph::Dot),
    ("선", PointGlyph::DiagonalLine),
    ("면", PointGlyph::StackedPlanes),
    ("포지티브", PointGlyph::PositiveForm),
    ("네거티브", PointGlyph::NegativeForm),
    ("정면", PointGlyph::FrontFaces),
    ("단면", PointGlyph::CrossSection),
    ("반전", PointGlyph::InvertedHalves),
    ("트리밍", PointGlyph::TrimFrame),
    ("재현", PointGlyph::DotCluster),
    ("도형화", PointGlyph::OutlinedDiamond),
    ("스케일", PointGlyph::ScaleContrast),
    ("타이포그래피", PointGlyph::TypeSpecimen),
    ("시각적 수사학", PointGlyph::Rhetoric),
    ("게슈탈트", PointGlyph::GestaltArcs),
    ("Observation", PointGlyph::ObservingEye),
    ("Deconstruction", PointGlyph::ScatteredBlocks),
    ("Reconstruction", PointGlyph::AssembledFrame),
    ("Value", PointGlyph::ValueGem),
];

/// Resolve a point's glyph by first matching prefix, if any.
pub fn glyph_for_point(text: &str) -> Option<PointGlyph> {
    PREFIX_GLYPHS
        .iter()
        .find(|(prefix, _)| text.starts_with(prefix))
        .map(|&(_, glyph)| glyph)
}

/// Zero-padded two-digit chapter label.
#[inline]
pub fn chapter_label(index: usize) -> String {
    format!("{:02}", index)
}

pub const SECTIONS: &[ContentSection] = &[
    ContentSection {
        title: "다르게 본다",
        subtitle: Some("Cocodio Lab — visual research"),
        description: "익숙한 사물을 낯설게 바라보는 일곱 개의 장. \
                      스크롤을 내리며 형태가 해체되고 다시 조립되는 과정을 따라갑니다.",
        points: &[],
        is_dark: false,
    },
    ContentSection {
        title: "조형의 요소",
        subtitle: Some("Elements"),
        description: "모든 이미지는 점에서 출발한다. 점이 움직이면 선이 되고, \
                      선이 닫히면 면이 된다.",
        points: &[
            "점 — 모든 형태의 시작이자 최소 단위",
            "선 — 점의 궤적, 방향과 속도의 기록",
            "면 — 선이 닫히며 만들어 내는 영역",
        ],
        is_dark: false,
    },
    ContentSection {
        title: "공간",
        subtitle: Some("Space"),
        description: "형태는 홀로 존재하지 않는다. 차지한 자리와 비워 둔 자리가 \
                      함께 하나의 구도를 이룬다.",
        points: &[
            "포지티브 스페이스 — 형태가 차지하는 영역",
            "네거티브 스페이스 — 형태가 비워 두는 영역",
        ],
        is_dark: false,
    },
    ContentSection {
        title: "시점",
        subtitle: Some("Perspective"),
        description: "같은 사물도 어디서 자르고 어디서 바라보느냐에 따라 \
                      전혀 다른 얼굴을 보여 준다.",
        points: &[
            "정면과 측면 — 같은 사물, 다른 얼굴",
            "단면 — 잘라야 비로소 보이는 내부",
            "반전 — 앞뒤를 뒤집어 읽는 형태",
            "트리밍 — 프레임으로 다시 묶는 시선",
        ],
        is_dark: false,
    },
    ContentSection {
        title: "구조",
        subtitle: Some("Structure"),
        description: "관찰한 것을 어떤 밀도로 옮길 것인가. 재현과 단순화 사이에서 \
                      구조가 결정된다.",
        points: &[
            "재현 — 본 것을 그대로 옮기기",
            "도형화 — 본질만 남기고 단순화하기",
            "스케일 — 크기 대비로 만드는 위계",
        ],
        is_dark: false,
    },
    ContentSection {
        title: "조형의 시학",
        subtitle: Some("Poetics"),
        description: "형태는 결국 말한다. 문자로, 은유로, 그리고 부분이 아닌 \
                      전체의 인상으로.",
        points: &[
            "타이포그래피 — 문자가 곧 형태",
            "시각적 수사학 — 은유로 말하는 이미지",
            "게슈탈트 — 부분이 아니라 전체로 지각",
        ],
        is_dark: true,
    },
    ContentSection {
        title: "알고리즘",
        subtitle: Some("Algorithm"),
        description: "하나의 작업이 완성되기까지, 바라보고 분해하고 \
                      다시 세우는 네 단계.",
        points: &[
            "Observation — 대상을 끝까지 바라본다",
            "Deconstruction — 요소 단위로 분해한다",
            "Reconstruction — 새로운 질서로 재조립한다",
            "Value — 조형이 만들어 내는 감각적 가치",
        ],
        is_dark: false,
    },
];
