/// SMARTS-defined functional group counters. Exported as `fr_*` capabilities.
#[derive(Debug, Clone, Copy)]
pub struct FragmentPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub smarts: &'static str,
}

pub const FRAGMENT_PREFIX: &str = "fr_";

pub const FRAGMENT_PATTERNS: [FragmentPattern; 26] = [
    FragmentPattern {
        name: "fr_Al_OH",
        description: "Number of aliphatic hydroxyl groups",
        smarts: "[C!$(C=O)]-[OH]",
    },
    FragmentPattern {
        name: "fr_Ar_OH",
        description: "Number of aromatic hydroxyl groups",
        smarts: "c[OH1]",
    },
    FragmentPattern {
        name: "fr_C_O",
        description: "Number of carbonyl O",
        smarts: "[CX3]=[OX1]",
    },
    FragmentPattern {
        name: "fr_C_O_noCOO",
        description: "Number of carbonyl O, excluding COOH",
        smarts: "[C!$(C-[OH])]=O",
    },
    FragmentPattern {
        name: "fr_COO",
        description: "Number of carboxylic acids",
        smarts: "[#6]C(=O)[O;H,-1]",
    },
    FragmentPattern {
        name: "fr_NH0",
        description: "Number of tertiary amines",
        smarts: "[NH0;X3;v3]",
    },
    FragmentPattern {
        name: "fr_NH1",
        description: "Number of secondary amines",
        smarts: "[NH1;X3;v3]",
    },
    FragmentPattern {
        name: "fr_NH2",
        description: "Number of primary amines",
        smarts: "[NH2;X3;v3]",
    },
    FragmentPattern {
        name: "fr_aldehyde",
        description: "Number of aldehydes",
        smarts: "[CX3H1](=O)[#6]",
    },
    FragmentPattern {
        name: "fr_amide",
        description: "Number of amides",
        smarts: "C(=O)-N",
    },
    FragmentPattern {
        name: "fr_aniline",
        description: "Number of anilines",
        smarts: "c-[NX3;!$(N=*)]",
    },
    FragmentPattern {
        name: "fr_azo",
        description: "Number of azo groups",
        smarts: "[#6]-N=N-[#6]",
    },
    FragmentPattern {
        name: "fr_benzene",
        description: "Number of benzene rings",
        smarts: "c1ccccc1",
    },
    FragmentPattern {
        name: "fr_ester",
        description: "Number of esters",
        smarts: "[#6][CX3](=O)[OX2H0][#6]",
    },
    FragmentPattern {
        name: "fr_ether",
        description: "Number of ether oxygens (including phenoxy)",
        smarts: "[OD2]([#6])[#6]",
    },
    FragmentPattern {
        name: "fr_furan",
        description: "Number of furan rings",
        smarts: "o1cccc1",
    },
    FragmentPattern {
        name: "fr_halogen",
        description: "Number of halogens",
        smarts: "[#9,#17,#35,#53]",
    },
    FragmentPattern {
        name: "fr_imidazole",
        description: "Number of imidazole rings",
        smarts: "c1cnc[nH]1",
    },
    FragmentPattern {
        name: "fr_ketone",
        description: "Number of ketones",
        smarts: "[#6][CX3](=O)[#6]",
    },
    FragmentPattern {
        name: "fr_nitrile",
        description: "Number of nitriles",
        smarts: "[NX1]#[CX2]",
    },
    FragmentPattern {
        name: "fr_nitro",
        description: "Number of nitro groups",
        smarts: "[$([NX3](=O)=O),$([NX3+](=O)[O-])][!#8]",
    },
    FragmentPattern {
        name: "fr_phenol",
        description: "Number of phenols",
        smarts: "[OX2H]-c1ccccc1",
    },
    FragmentPattern {
        name: "fr_pyridine",
        description: "Number of pyridine rings",
        smarts: "n1ccccc1",
    },
    FragmentPattern {
        name: "fr_sulfonamd",
        description: "Number of sulfonamides",
        smarts: "N-S(=O)(=O)-[#6]",
    },
    FragmentPattern {
        name: "fr_thiophene",
        description: "Number of thiophene rings",
        smarts: "c1ccsc1",
    },
    FragmentPattern {
        name: "fr_urea",
        description: "Number of urea groups",
        smarts: "C(=O)(-N)-N",
    },
];

pub fn find_fragment(name: &str) -> Option<&'static FragmentPattern> {
    FRAGMENT_PATTERNS.iter().find(|f| f.name == name)
}
