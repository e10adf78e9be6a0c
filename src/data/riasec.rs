/// The six interest dimensions of the RIASEC model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Realistic,
        Dimension::Investigative,
        Dimension::Artistic,
        Dimension::Social,
        Dimension::Enterprising,
        Dimension::Conventional,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Dimension::Realistic => "R",
            Dimension::Investigative => "I",
            Dimension::Artistic => "A",
            Dimension::Social => "S",
            Dimension::Enterprising => "E",
            Dimension::Conventional => "C",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Realistic => "Realistic",
            Dimension::Investigative => "Investigative",
            Dimension::Artistic => "Artistic",
            Dimension::Social => "Social",
            Dimension::Enterprising => "Enterprising",
            Dimension::Conventional => "Conventional",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dimension::Realistic => {
                "Enjoys hands-on work: building, repairing and assembling things, \
                 operating tools and machines, often outdoors."
            }
            Dimension::Investigative => {
                "Enjoys discovering and researching ideas: observing, investigating, \
                 experimenting, asking questions and solving problems."
            }
            Dimension::Artistic => {
                "Enjoys words, art, music or drama to communicate and express \
                 themselves, creating and designing things."
            }
            Dimension::Social => {
                "Enjoys teaching, coaching and informing, helping, treating and \
                 serving others, caring about the wellbeing of people."
            }
            Dimension::Enterprising => {
                "Enjoys meeting people, leading, speaking and persuading, \
                 motivating others and working in business."
            }
            Dimension::Conventional => {
                "Enjoys indoor work that involves organisation and accuracy: \
                 following procedures, working with data or numbers, planning."
            }
        }
    }

    /// Looks up a dimension by its one-letter code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Position in canonical R-I-A-S-E-C order.
    pub fn rank(self) -> usize {
        self as usize
    }
}
