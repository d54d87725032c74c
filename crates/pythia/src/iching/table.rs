//! The sixty-four hexagram records and the King Wen trigram lookup.

use crate::error::OracleError;
use crate::iching::trigram::Trigram;
use lazy_static::lazy_static;

/// Static text of one hexagram, keyed by its King Wen number
#[derive(Debug, PartialEq, Eq)]
pub struct HexagramRecord {
    pub number: u8,
    pub chinese: &'static str,
    pub pinyin: &'static str,
    pub russian: &'static str,
    pub english: &'static str,
    pub judgment: &'static str,
    pub image: &'static str,
    pub interpretation: &'static str,
}

#[allow(clippy::too_many_arguments)]
const fn rec(
    number: u8,
    chinese: &'static str,
    pinyin: &'static str,
    russian: &'static str,
    english: &'static str,
    judgment: &'static str,
    image: &'static str,
    interpretation: &'static str,
) -> HexagramRecord {
    HexagramRecord {
        number,
        chinese,
        pinyin,
        russian,
        english,
        judgment,
        image,
        interpretation,
    }
}

/// King Wen number indexed by `[upper][lower]`, rows and columns in
/// [`Trigram::ALL`] order.
pub const KING_WEN: [[u8; 8]; 8] = [
    [1, 25, 6, 33, 12, 44, 13, 10],
    [34, 51, 40, 62, 16, 32, 55, 54],
    [5, 3, 29, 39, 8, 48, 63, 60],
    [26, 27, 4, 52, 23, 18, 22, 41],
    [11, 24, 7, 15, 2, 46, 36, 19],
    [9, 42, 59, 53, 20, 57, 37, 61],
    [14, 21, 64, 56, 35, 50, 30, 38],
    [43, 17, 47, 31, 45, 28, 49, 58],
];

pub fn king_wen_number(upper: Trigram, lower: Trigram) -> u8 {
    KING_WEN[upper.index()][lower.index()]
}

/// Upper and lower trigram of hexagram `number`.
pub fn trigrams_of(number: u8) -> Result<(Trigram, Trigram), OracleError> {
    for upper in Trigram::ALL {
        for lower in Trigram::ALL {
            if king_wen_number(upper, lower) == number {
                return Ok((upper, lower));
            }
        }
    }
    Err(OracleError::Lookup {
        table: "king_wen",
        key: number as u64,
    })
}

/// Record for hexagram `number` (1..=64).
pub fn record(number: u8) -> Result<&'static HexagramRecord, OracleError> {
    (number as usize)
        .checked_sub(1)
        .and_then(|i| HEXAGRAMS.get(i))
        .filter(|r| r.number == number)
        .ok_or_else(|| OracleError::Lookup {
            table: "hexagrams",
            key: number as u64,
        })
}

lazy_static! {
    /// First hexagram number lacking a record or a trigram pair.
    static ref TABLE_DEFECT: Option<u8> =
        (1..=64u8).find(|&n| record(n).is_err() || trigrams_of(n).is_err());
}

/// Checked once per process; a defect fails every casting afterwards.
pub fn ensure_complete() -> Result<(), OracleError> {
    match *TABLE_DEFECT {
        Some(number) => {
            log::error!("Hexagram table has no usable entry {}", number);
            Err(OracleError::Lookup {
                table: "hexagrams",
                key: u64::from(number),
            })
        }
        None => Ok(()),
    }
}

pub static HEXAGRAMS: [HexagramRecord; 64] = [
    rec(1, "乾", "Qián", "Творчество", "The Creative",
        "Sublime success. Perseverance furthers.",
        "Heaven moves with strength. The noble one makes himself strong and untiring.",
        "A time for active deeds. Creative force is strong and every beginning is favoured."),
    rec(2, "坤", "Kūn", "Исполнение", "The Receptive",
        "Sublime success, furthering through the perseverance of a mare.",
        "The earth's condition is receptive devotion. The noble one carries the world with breadth of character.",
        "A time for receptiveness and devotion. Follow the one who leads; yielding brings success."),
    rec(3, "屯", "Zhūn", "Начальная трудность", "Difficulty at the Beginning",
        "Supreme success. Perseverance furthers. Nothing should be undertaken yet.",
        "Clouds and thunder. The noble one brings order out of confusion.",
        "Early obstacles. Persist, do not rush, and gather helpers."),
    rec(4, "蒙", "Méng", "Недоразвитость", "Youthful Folly",
        "It is not I who seek the young fool; the young fool seeks me.",
        "A spring wells up at the foot of the mountain. The noble one fosters character by thoroughness.",
        "Inexperience calls for a teacher. Ask sincerely and listen to the answer."),
    rec(5, "需", "Xū", "Необходимость ждать", "Waiting",
        "With sincerity there is light and success. It furthers one to cross the great water.",
        "Clouds rise up to heaven. The noble one eats and drinks and stays of good cheer.",
        "The moment has not come. Wait calmly and keep your strength."),
    rec(6, "訟", "Sòng", "Тяжба", "Conflict",
        "Halting halfway brings good fortune. Going through to the end brings misfortune.",
        "Heaven and water go their opposite ways. The noble one considers the beginning of every affair.",
        "A dispute is brewing. Seek a fair mediator rather than pressing to the end."),
    rec(7, "師", "Shī", "Войско", "The Army",
        "The army needs perseverance and a strong leader.",
        "Water in the middle of the earth. The noble one nourishes and gathers the people.",
        "Discipline and organisation win. Lead by example and keep the group together."),
    rec(8, "比", "Bǐ", "Приближение", "Holding Together",
        "Holding together brings good fortune. Those who hesitate come late.",
        "Water on the earth. The ancient kings bestowed the land and cultivated friendly relations.",
        "Unite with people who share your aim. Do not delay joining them."),
    rec(9, "小畜", "Xiǎo Chù", "Воспитание малым", "The Taming Power of the Small",
        "Dense clouds, no rain from our western region.",
        "The wind drives across heaven. The noble one refines the outward aspect of his nature.",
        "Small steps restrain great forces. Patience and gentleness prepare the way."),
    rec(10, "履", "Lǚ", "Наступление", "Treading",
        "Treading on the tail of the tiger. It does not bite.",
        "Heaven above, the lake below. The noble one discriminates between high and low.",
        "Move carefully among powerful people. Good manners keep you safe."),
    rec(11, "泰", "Tài", "Расцвет", "Peace",
        "The small departs, the great approaches. Good fortune and success.",
        "Heaven and earth unite. The ruler completes the course of heaven and earth.",
        "Harmony and prosperity. Use this blossoming period to build for the future."),
    rec(12, "否", "Pǐ", "Упадок", "Standstill",
        "Evil people do not further the perseverance of the noble one.",
        "Heaven and earth do not unite. The noble one falls back on inner worth.",
        "Stagnation. Withdraw, preserve your principles and wait for the turn."),
    rec(13, "同人", "Tóng Rén", "Единомышленники", "Fellowship with Men",
        "Fellowship in the open. Success. It furthers one to cross the great water.",
        "Heaven together with fire. The noble one organises the clans and distinguishes things.",
        "Shared goals bring people together. Act openly, not for a faction."),
    rec(14, "大有", "Dà Yǒu", "Обладание великим", "Possession in Great Measure",
        "Supreme success.",
        "Fire in heaven above. The noble one curbs evil and furthers good.",
        "Abundance and recognition. Stay modest and share generously."),
    rec(15, "謙", "Qiān", "Смирение", "Modesty",
        "Modesty creates success. The noble one carries things through.",
        "Within the earth, a mountain. The noble one reduces what is too much and increases what is too little.",
        "Modesty opens doors. Balance excess and lack without boasting."),
    rec(16, "豫", "Yù", "Вольность", "Enthusiasm",
        "It furthers one to install helpers and to set armies marching.",
        "Thunder comes resounding out of the earth. The ancient kings made music to honour merit.",
        "Enthusiasm moves others. Channel it into shared, well-prepared action."),
    rec(17, "隨", "Suí", "Последование", "Following",
        "Following has supreme success. Perseverance furthers. No blame.",
        "Thunder in the middle of the lake. At nightfall the noble one goes indoors to rest.",
        "Adapt to the times and follow what is right. Rest when rest is due."),
    rec(18, "蠱", "Gǔ", "Исправление порчи", "Work on What Has Been Spoiled",
        "Supreme success. It furthers one to cross the great water.",
        "The wind blows low on the mountain. The noble one stirs up the people and strengthens their spirit.",
        "Something neglected needs repair. Find the cause and set it right."),
    rec(19, "臨", "Lín", "Посещение", "Approach",
        "Approach has supreme success. In the eighth month there will be misfortune.",
        "The earth above the lake. The noble one is inexhaustible in teaching and tolerance.",
        "Favourable forces approach. Make good use of them before the season turns."),
    rec(20, "觀", "Guān", "Созерцание", "Contemplation",
        "The ablution has been made, but not yet the offering. Full of trust they look up.",
        "The wind blows over the earth. The ancient kings visited the regions and gave instruction.",
        "Step back and observe. Understanding precedes action."),
    rec(21, "噬嗑", "Shì Kè", "Стиснутые зубы", "Biting Through",
        "Biting through has success. It is favourable to let justice be administered.",
        "Thunder and lightning. The ancient kings made firm the laws through clearly defined penalties.",
        "An obstacle must be bitten through. Act decisively and fairly."),
    rec(22, "賁", "Bì", "Убранство", "Grace",
        "Grace has success. In small matters it is favourable to undertake something.",
        "Fire at the foot of the mountain. The noble one clarifies current affairs.",
        "Beauty and form matter, but do not let appearances decide great questions."),
    rec(23, "剝", "Bō", "Разорение", "Splitting Apart",
        "It does not further one to go anywhere.",
        "The mountain rests on the earth. Those above secure their position by generosity to those below.",
        "Things are falling apart. Do not act; hold still and let the decline pass."),
    rec(24, "復", "Fù", "Возврат", "Return",
        "Success. Going out and coming in without error. Friends come without blame.",
        "Thunder within the earth. The ancient kings closed the passes at the solstice.",
        "A turning point. The light returns; let new beginnings grow slowly."),
    rec(25, "無妄", "Wú Wàng", "Беспорочность", "Innocence",
        "Supreme success. Perseverance furthers. If someone is not as he should be, he has misfortune.",
        "Under heaven thunder rolls. The ancient kings nourished all beings in harmony with the time.",
        "Act from sincerity without ulterior motives and the outcome takes care of itself."),
    rec(26, "大畜", "Dà Chù", "Воспитание великим", "The Taming Power of the Great",
        "Perseverance furthers. Not eating at home brings good fortune.",
        "Heaven within the mountain. The noble one acquaints himself with the sayings of antiquity.",
        "Gather strength and knowledge. Restraint now builds great power."),
    rec(27, "頤", "Yí", "Питание", "The Corners of the Mouth",
        "Perseverance brings good fortune. Pay heed to the providing of nourishment.",
        "At the foot of the mountain, thunder. The noble one is careful of words and temperate in eating.",
        "Watch what you take in and what you give out, in food and in words."),
    rec(28, "大過", "Dà Guò", "Переразвитие великого", "Preponderance of the Great",
        "The ridgepole sags to the breaking point. It furthers one to have somewhere to go.",
        "The lake rises above the trees. The noble one stands alone unconcerned.",
        "The load is too heavy. Find a way out before the beam breaks."),
    rec(29, "坎", "Kǎn", "Бездна", "The Abysmal",
        "If you are sincere, you have success in your heart, and whatever you do succeeds.",
        "Water flows on uninterruptedly. The noble one walks in lasting virtue.",
        "Danger repeats itself. Stay true like flowing water and you will pass through."),
    rec(30, "離", "Lí", "Сияние", "The Clinging",
        "Perseverance furthers. Care of the cow brings good fortune.",
        "Brightness rises twice. The great one illumines the four quarters of the world.",
        "Clarity depends on what it clings to. Choose your attachments well."),
    rec(31, "咸", "Xián", "Взаимодействие", "Influence",
        "Success. Perseverance furthers. To take a maiden to wife brings good fortune.",
        "A lake on the mountain. The noble one receives people by virtue of his readiness.",
        "Mutual attraction. Stay open and receptive and influence flows both ways."),
    rec(32, "恆", "Héng", "Постоянство", "Duration",
        "Success. No blame. Perseverance furthers.",
        "Thunder and wind. The noble one stands firm and does not change direction.",
        "Lasting things renew themselves. Keep your course with steady effort."),
    rec(33, "遯", "Dùn", "Бегство", "Retreat",
        "Success. In what is small, perseverance furthers.",
        "Mountain under heaven. The noble one keeps the inferior at a distance, not angrily but with reserve.",
        "Withdraw in time. A retreat now preserves strength for later."),
    rec(34, "大壯", "Dà Zhuàng", "Мощь великого", "The Power of the Great",
        "Perseverance furthers.",
        "Thunder in heaven above. The noble one does not tread paths that are not in accord with order.",
        "Great strength is at hand. Use it only for what is right."),
    rec(35, "晉", "Jìn", "Восход", "Progress",
        "The powerful prince is honoured with horses in large numbers.",
        "The sun rises over the earth. The noble one brightens his own virtue.",
        "Rapid and easy progress. Recognition comes to those who serve well."),
    rec(36, "明夷", "Míng Yí", "Поражение света", "Darkening of the Light",
        "In adversity it furthers one to be persevering.",
        "The light has sunk into the earth. The noble one veils his light yet still shines.",
        "Hard times. Keep your inner light hidden and endure."),
    rec(37, "家人", "Jiā Rén", "Домашние", "The Family",
        "The perseverance of the woman furthers.",
        "Wind comes forth from fire. The noble one has substance in his words and duration in his way of life.",
        "Order at home is the root of order everywhere. Tend your close circle."),
    rec(38, "睽", "Kuí", "Разлад", "Opposition",
        "In small matters, good fortune.",
        "Fire above, the lake below. Amid all fellowship the noble one retains his individuality.",
        "Differences divide. Small agreements are still possible; do not force unity."),
    rec(39, "蹇", "Jiǎn", "Препятствие", "Obstruction",
        "The southwest furthers. The northeast does not further. It furthers one to see the great man.",
        "Water on the mountain. The noble one turns his attention to himself and molds his character.",
        "The way ahead is blocked. Pause, look inward and seek able allies."),
    rec(40, "解", "Xiè", "Разрешение", "Deliverance",
        "The southwest furthers. If there is still something to go to, hastening brings good fortune.",
        "Thunder and rain set in. The noble one pardons mistakes and forgives misdeeds.",
        "Tension releases. Clear up what remains quickly and return to normal life."),
    rec(41, "損", "Sǔn", "Убыль", "Decrease",
        "Decrease combined with sincerity brings supreme good fortune without blame.",
        "At the foot of the mountain, the lake. The noble one controls his anger and restrains his instincts.",
        "Simplify. What is given up now strengthens what matters."),
    rec(42, "益", "Yì", "Приумножение", "Increase",
        "It furthers one to undertake something. It furthers one to cross the great water.",
        "Wind and thunder. When the noble one sees good, he imitates it.",
        "A period of gain. Act boldly and share the benefit."),
    rec(43, "夬", "Guài", "Выход", "Breakthrough",
        "One must resolutely make the matter known at the court of the king.",
        "The lake has risen up to heaven. The noble one dispenses riches downward.",
        "A decisive break is needed. Speak the truth openly, without violence."),
    rec(44, "姤", "Gòu", "Перечение", "Coming to Meet",
        "The maiden is powerful. One should not marry such a maiden.",
        "Under heaven, wind. The prince distributes his commands to the four quarters.",
        "An unexpected encounter. Be wary of influences that grow quickly."),
    rec(45, "萃", "Cuì", "Воссоединение", "Gathering Together",
        "Success. The king approaches his temple. It furthers one to see the great man.",
        "Over the earth, the lake. The noble one renews his weapons to meet the unforeseen.",
        "People gather around a common centre. Prepare for the unexpected."),
    rec(46, "升", "Shēng", "Подъём", "Pushing Upward",
        "Pushing upward has supreme success. One must see the great man. Fear not.",
        "Within the earth, wood grows. The noble one heaps up small things to achieve greatness.",
        "Steady growth. Advance step by step with effort and humility."),
    rec(47, "困", "Kùn", "Истощение", "Oppression",
        "Success. Perseverance. The great man brings good fortune. No blame.",
        "There is no water in the lake. The noble one stakes his life on following his will.",
        "Exhaustion and restriction. Words carry little weight now; stay cheerful within."),
    rec(48, "井", "Jǐng", "Колодец", "The Well",
        "The town may be changed, but the well cannot be changed.",
        "Water over wood. The noble one encourages the people at their work.",
        "Return to the source that feeds everyone. Keep it clean and accessible."),
    rec(49, "革", "Gé", "Смена", "Revolution",
        "On your own day you are believed. Supreme success. Remorse disappears.",
        "Fire in the lake. The noble one sets the calendar in order and makes the seasons clear.",
        "Time for change. Move when the need is clear to everyone."),
    rec(50, "鼎", "Dǐng", "Жертвенник", "The Cauldron",
        "Supreme good fortune. Success.",
        "Fire over wood. The noble one consolidates his fate by making his position correct.",
        "Transformation through culture and care. Nourish what is valuable."),
    rec(51, "震", "Zhèn", "Молния", "The Arousing",
        "Shock brings success. Shock comes, oh oh! Laughing words, ha ha!",
        "Thunder repeated. The noble one sets his life in order and examines himself.",
        "A sudden shock. After the fright comes clarity and a fresh start."),
    rec(52, "艮", "Gèn", "Сосредоточенность", "Keeping Still",
        "Keeping his back still so that he no longer feels his body. No blame.",
        "Mountains standing close together. The noble one does not let his thoughts go beyond his situation.",
        "Be still. Calm the mind and act only when the moment is right."),
    rec(53, "漸", "Jiàn", "Течение", "Development",
        "The maiden is given in marriage. Good fortune. Perseverance furthers.",
        "On the mountain, a tree. The noble one abides in dignity and virtue.",
        "Gradual progress. Follow the proper steps and the result will last."),
    rec(54, "歸妹", "Guī Mèi", "Невеста", "The Marrying Maiden",
        "Undertakings bring misfortune. Nothing that would further.",
        "Thunder over the lake. The noble one understands the transitory in the light of the eternity of the end.",
        "A subordinate position. Keep realistic expectations and act with tact."),
    rec(55, "豐", "Fēng", "Изобилие", "Abundance",
        "Abundance has success. Be not sad. Be like the sun at midday.",
        "Both thunder and lightning come. The noble one decides lawsuits and carries out punishments.",
        "A peak of fullness. Enjoy it fully, knowing every noon turns to evening."),
    rec(56, "旅", "Lǚ", "Странствие", "The Wanderer",
        "Success through smallness. Perseverance brings good fortune to the wanderer.",
        "Fire on the mountain. The noble one is clear-minded and cautious in imposing penalties.",
        "Away from home. Be polite, reserved and careful with strangers."),
    rec(57, "巽", "Xùn", "Проникновение", "The Gentle",
        "Success through what is small. It furthers one to have somewhere to go.",
        "Winds following one upon the other. The noble one spreads his commands abroad.",
        "Gentle, persistent influence achieves what force cannot."),
    rec(58, "兌", "Duì", "Радость", "The Joyous",
        "Success. Perseverance is favourable.",
        "Lakes resting one on the other. The noble one joins with his friends for discussion and practice.",
        "Joy shared grows. Friendly exchange brings success."),
    rec(59, "渙", "Huàn", "Раздробление", "Dispersion",
        "Success. The king approaches his temple. It furthers one to cross the great water.",
        "The wind drives over the water. The ancient kings sacrificed to the Lord and built temples.",
        "Rigid things dissolve. Let go of egoism and reunite around a shared purpose."),
    rec(60, "節", "Jié", "Ограничение", "Limitation",
        "Limitation brings success. Galling limitation must not be persevered in.",
        "Water over the lake. The noble one creates number and measure.",
        "Set sensible limits. Too strict a limit becomes a burden."),
    rec(61, "中孚", "Zhōng Fú", "Внутренняя правда", "Inner Truth",
        "Pigs and fishes. Good fortune. It furthers one to cross the great water.",
        "Wind over the lake. The noble one discusses criminal cases in order to delay executions.",
        "Inner sincerity reaches even the hardest hearts. Understand before judging."),
    rec(62, "小過", "Xiǎo Guò", "Переразвитие малого", "Preponderance of the Small",
        "Small things may be done; great things should not be done.",
        "Thunder on the mountain. The noble one gives preponderance to reverence in conduct.",
        "Attend to small matters with care. This is not the time for grand plans."),
    rec(63, "既濟", "Jì Jì", "Уже конец", "After Completion",
        "Success in small matters. At the beginning good fortune, at the end disorder.",
        "Water over fire. The noble one takes thought of misfortune and arms himself against it.",
        "The goal is reached. Stay attentive: order slips easily back into disorder."),
    rec(64, "未濟", "Wèi Jì", "Ещё не конец", "Before Completion",
        "Success. But if the little fox gets its tail wet, there is nothing that would further.",
        "Fire over water. The noble one is careful in the differentiation of things.",
        "The transition is not finished. Proceed cautiously to the very end."),
];
