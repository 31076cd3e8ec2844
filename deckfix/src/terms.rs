//! The wrong-term → correct-term dictionary.
//!
//! A [`TermMap`] is loaded once at process start and never mutated. Keys may
//! overlap as substrings of one another, so replacements are applied
//! longest-key-first; ties and application order are fixed at construction
//! time so correction is fully deterministic.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Error;

/// Built-in correction table for English→Korean CS flashcards: wrong Korean
/// renderings of technical terms mapped back to the canonical term.
/// Declaration order matters only for duplicate keys and equal-length ties.
const BUILTIN_TERMS: &[(&str, &str)] = &[
    // primitive data types
    ("챠 ", "char "),
    ("챠의", "char의"),
    ("챠가", "char가"),
    ("불 크기", "bool 크기"),
    ("불의", "bool의"),
    ("짧은 크기", "short 크기"),
    ("짧은의", "short의"),
    ("긴 크기", "long 크기"),
    ("긴의", "long의"),
    ("긴 길이", "long long"),
    // software and services
    ("동물원 사육사", "ZooKeeper"),
    ("동물원사육사", "ZooKeeper"),
    ("주키퍼", "ZooKeeper"),
    ("오징어", "Squid"),
    ("스퀴드", "Squid"),
    ("래빗MQ", "RabbitMQ"),
    ("래빗 MQ", "RabbitMQ"),
    ("토끼MQ", "RabbitMQ"),
    ("카산드라", "Cassandra"),
    ("카싼드라", "Cassandra"),
    ("몽고DB", "MongoDB"),
    ("몽고 DB", "MongoDB"),
    ("레디스", "Redis"),
    ("카프카", "Kafka"),
    ("도커", "Docker"),
    ("쿠버네티스", "Kubernetes"),
    ("엘라스틱서치", "Elasticsearch"),
    ("일래스틱서치", "Elasticsearch"),
    ("하둡", "Hadoop"),
    ("스파크", "Spark"),
    ("메모리캐시드", "Memcached"),
    ("멤캐시드", "Memcached"),
    ("엔진엑스", "nginx"),
    ("엔진X", "nginx"),
    ("아파치", "Apache"),
    ("제플린", "Zeppelin"),
    ("카우치DB", "CouchDB"),
    ("카우치 DB", "CouchDB"),
    ("H베이스", "HBase"),
    ("에이치베이스", "HBase"),
    ("빅테이블", "BigTable"),
    ("빅 테이블", "BigTable"),
    ("다이나모DB", "DynamoDB"),
    ("다이나모 DB", "DynamoDB"),
    ("아마존 다이나모", "Amazon Dynamo"),
    ("마리아DB", "MariaDB"),
    ("마리아 DB", "MariaDB"),
    ("포스트그레SQL", "PostgreSQL"),
    ("포스트그레스", "PostgreSQL"),
    ("마이SQL", "MySQL"),
    ("마이 SQL", "MySQL"),
    // algorithms and data structures
    ("해시맵", "HashMap"),
    ("해시 맵", "HashMap"),
    ("해시셋", "HashSet"),
    ("해시 셋", "HashSet"),
    ("링크드리스트", "LinkedList"),
    ("링크드 리스트", "LinkedList"),
    ("연결 리스트", "Linked List"),
    ("이진 검색 트리", "Binary Search Tree"),
    ("레드블랙 트리", "Red-Black Tree"),
    ("레드-블랙 트리", "Red-Black Tree"),
    ("AVL 트리", "AVL Tree"),
    ("에이브이엘 트리", "AVL Tree"),
    ("B 트리", "B-Tree"),
    ("비 트리", "B-Tree"),
    ("힙 정렬", "Heap Sort"),
    ("퀵 정렬", "Quick Sort"),
    ("퀵정렬", "QuickSort"),
    ("병합 정렬", "Merge Sort"),
    ("병합정렬", "MergeSort"),
    ("버블 정렬", "Bubble Sort"),
    ("삽입 정렬", "Insertion Sort"),
    ("선택 정렬", "Selection Sort"),
    // networking
    ("에이치에이프록시", "HAProxy"),
    ("바니시", "Varnish"),
    // message brokers and work queues
    ("셀러리란", "Celery란"),
    ("셀러리는", "Celery는"),
    ("셀러리", "Celery"),
    ("기어맨", "Gearman"),
    ("호넷큐", "HornetQ"),
    ("조람", "JORAM"),
    ("콩나무", "BeanstalkD"),
    ("액티브MQ", "ActiveMQ"),
    // databases and caches; the duplicate 레디스 key resolves first-wins
    ("레디스", "Redis"),
    ("레디는", "Redis는"),
    ("레디", "Redis"),
    ("볼드모트", "Voldemort"),
    ("리아크", "Riak"),
    ("하이퍼테이블", "Hypertable"),
    ("인Memcache", "in-memory cache"),
    ("인메모리", "in-memory"),
    ("구글 BigTable", "Google BigTable"),
    ("아마존 다이너모DB", "Amazon DynamoDB"),
    // companies and brands
    ("빨간 모자", "Red Hat"),
    ("레드햇", "Red Hat"),
    // complexity and general CS vocabulary
    ("빅 오", "Big O"),
    ("빅오", "Big-O"),
    ("빅 오 표기법", "Big-O notation"),
    ("시간 복잡도", "time complexity"),
    ("공간 복잡도", "space complexity"),
    ("점근적", "asymptotic"),
    // systems and networking vocabulary
    ("소켓", "socket"),
    ("포트 번호", "port number"),
    ("교착 상태", "deadlock"),
    // distributed systems and databases
    ("최종 일관성", "eventual consistency"),
    ("정족수", "quorum"),
    ("리더 선출", "leader election"),
    ("샤딩", "sharding"),
    ("파티션", "partition"),
    ("스냅샷", "snapshot"),
    // frequently garbled acronyms
    ("에이피아이", "API"),
    ("레스트", "REST"),
    ("유알엘", "URL"),
    ("제이슨", "JSON"),
    ("제이더블유티", "JWT"),
    // null must never be translated
    ("널 값", "null 값"),
    ("널값", "null값"),
    ("널을", "null을"),
    ("널이", "null이"),
    ("널로", "null로"),
    ("널과", "null과"),
    // true/false
    ("트루", "true"),
    ("폴스", "false"),
    ("참을 반환", "true를 반환"),
    ("거짓을 반환", "false를 반환"),
    ("참 또는 거짓", "true 또는 false"),
    ("참/거짓", "true/false"),
    // undefined
    ("정의되지 않은 값", "undefined 값"),
    ("정의되지 않음", "undefined"),
    // awkward phrasings worth a light touch-up
    ("만족스러운", "만족하는"),
    ("꼭짓점", "정점"),
    // graph terminology, restricted to unambiguous patterns
    ("그래프의 변", "그래프의 간선"),
    ("의 변과", "의 간선과"),
    ("변의 수", "간선의 수"),
    ("변을 ", "간선을 "),
    ("변이 ", "간선이 "),
];

/// An immutable wrong→correct term mapping with a precomputed, deterministic
/// replacement order (longest key first, declaration order on ties).
///
/// Duplicate keys are resolved first-wins by declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMap {
    /// Unique entries in declaration order.
    entries: Vec<(String, String)>,
    /// The same entries in application order.
    ordered: Vec<(String, String)>,
}

impl TermMap {
    /// Builds a map from (wrong, correct) pairs. The first occurrence of a
    /// duplicate key wins; later occurrences are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (wrong, correct) in pairs {
            let wrong = wrong.into();
            if entries.iter().any(|(existing, _)| *existing == wrong) {
                continue;
            }
            entries.push((wrong, correct.into()));
        }

        // Stable sort keeps declaration order for equal-length keys.
        let mut ordered = entries.clone();
        ordered.sort_by_key(|(wrong, _)| std::cmp::Reverse(wrong.chars().count()));

        TermMap { entries, ordered }
    }

    /// The built-in English→Korean flashcard correction table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_TERMS.iter().map(|&(wrong, correct)| (wrong, correct)))
    }

    /// Loads a map from a JSON object of `"wrong": "correct"` string pairs.
    pub fn from_json_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_reader(reader)?;
        let mut pairs = Vec::with_capacity(map.len());
        for (wrong, value) in map {
            match value {
                serde_json::Value::String(correct) => pairs.push((wrong, correct)),
                other => {
                    return Err(Error::invalid_terms(format!(
                        "value for `{wrong}` must be a string, got {other}"
                    )));
                }
            }
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Loads a JSON term table from a file path.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Entries in replacement application order: longest key first, with
    /// equal-length keys in declaration order.
    pub fn replacements(&self) -> &[(String, String)] {
        &self.ordered
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(wrong, correct)| (wrong.as_str(), correct.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
